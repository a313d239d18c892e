use std::path::Path;

pub trait FileName {
    /// The file name for log output, `unknown` when there is none or it is not UTF-8.
    fn string_file_name(&self) -> &str;
}

impl FileName for Path {
    fn string_file_name(&self) -> &str {
        self.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("waypoints/guide_points.json", "guide_points.json")]
    #[case("warning_points.json", "warning_points.json")]
    #[case("/", "unknown")]
    #[case("waypoints/..", "unknown")]
    fn string_file_name(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(PathBuf::from(path).string_file_name(), expected);
    }
}
