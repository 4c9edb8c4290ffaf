//! Argument expansion - filesystem globbing before dispatch.

/// Expand each argument independently against the filesystem.
///
/// Arguments containing glob metacharacters are replaced by their
/// sorted expansion; patterns that match nothing (or fail to parse)
/// pass through literally. The relative order of arguments is
/// preserved.
pub fn expand_args(args: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(args.len());

    for arg in args {
        if !contains_glob_chars(arg) {
            expanded.push(arg.clone());
            continue;
        }
        match glob::glob(arg) {
            Ok(paths) => {
                let mut matches: Vec<String> = paths
                    .filter_map(Result::ok)
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect();
                if matches.is_empty() {
                    expanded.push(arg.clone());
                } else {
                    matches.sort();
                    expanded.append(&mut matches);
                }
            }
            Err(_) => expanded.push(arg.clone()),
        }
    }

    expanded
}

fn contains_glob_chars(s: &str) -> bool {
    s.chars().any(|c| matches!(c, '*' | '?' | '['))
}
