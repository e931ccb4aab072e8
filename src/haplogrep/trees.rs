/// Tree used when neither the request nor the configuration names one.
pub const DEFAULT_TREE: &str = "phylotree-fu-rcrs@1.2";

/// Trees offered by the upload form, with display labels.
pub const KNOWN_TREES: &[(&str, &str)] = &[
    ("phylotree-fu-rcrs@1.2", "PhyloTree 17 - Forensic Update 1.2 (recommended)"),
    ("phylotree-fu-rcrs@1.0", "PhyloTree 17 - Forensic Update 1.0"),
    ("phylotree-rcrs@17.2", "PhyloTree 17.2"),
    ("phylotree-rcrs@17.0", "PhyloTree 17.0"),
    ("phylotree-rsrs@17.0", "PhyloTree 17.0 (RSRS)"),
    ("phylotree-rcrs@16.0", "PhyloTree 16.0"),
    ("phylotree-rcrs@15.0", "PhyloTree 15.0"),
];

pub fn tree_label(tree: &str) -> Option<&'static str> {
    KNOWN_TREES
        .iter()
        .find(|(id, _)| *id == tree)
        .map(|(_, label)| *label)
}

/// Parses `haplogrep3 trees` output: every non-empty line except the
/// `Available ...` header.
pub fn parse_tree_listing(stdout: &str) -> Vec<String> {
    stdout
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Available"))
        .map(str::to_string)
        .collect()
}
