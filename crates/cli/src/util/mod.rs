use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tree_filter::{BoxError, PlainDataError};

pub type CliResult<T> = Result<T, Box<dyn Error>>;

/// Producer failures carry no location; name the selector that reached them.
pub fn map_filter_error(selector: &str, err: BoxError) -> Box<dyn Error> {
    format!("filtering with `{selector}` failed: {err}").into()
}

pub fn map_plain_data_error(err: PlainDataError) -> Box<dyn Error> {
    Box::new(err)
}

/// Read the document from `path`, or from stdin when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
            Ok(text)
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    fn reads_input_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"a":1}}"#).expect("write");
        assert_eq!(read_input(Some(file.path())).unwrap(), r#"{"a":1}"#);
    }

    #[rstest]
    fn filter_errors_name_the_selector() {
        let err = map_filter_error("a[b]", "connection reset".into());
        assert_eq!(err.to_string(), "filtering with `a[b]` failed: connection reset");
    }

    #[rstest]
    fn missing_file_names_path() {
        let err = read_input(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
