use anyhow::Result;
use haplogrep_wrapper::haplogrep::read_results;
use std::path::PathBuf;

pub fn run(output_file: PathBuf, lines: Option<usize>) -> Result<()> {
    let content = read_results(&output_file)?;
    match lines {
        Some(n) => {
            for line in content.lines().take(n) {
                println!("{}", line);
            }
        }
        None => print!("{}", content),
    }
    Ok(())
}
