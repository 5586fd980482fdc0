/// Dump a font's metadata and glyph metrics to a JSON file
///
/// Reads a TTF or OTF file, collects the font-wide name, `head` and `hhea`
/// fields together with the metrics of every encoded glyph, and writes them
/// out as compact JSON.
mod utils;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use utils::die;

#[derive(Parser, Debug)]
#[command(name = "glyph_info_to_json", version, about, long_about = None)]
struct Cli {
    /// TTF or OTF file path
    #[clap(short = 'f', long = "font_file")]
    font_file: Option<PathBuf>,

    /// Output JSON file
    #[clap(short = 'o', long = "output_json")]
    output_json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Missing paths are not caught here; they fail when we try to use them.
    let font_file = cli.font_file.unwrap_or_default();
    let output_json = cli.output_json.unwrap_or_default();
    log::debug!(
        "Extracting {} to {}",
        font_file.display(),
        output_json.display()
    );

    if let Err(e) = glyphinfo::extract(&font_file, &output_json) {
        die("extracting glyph info", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "glyph_info_to_json",
            "--font_file",
            "Roboto-Regular.ttf",
            "--output_json",
            "roboto.json",
        ])
        .unwrap();
        assert_eq!(cli.font_file, Some(PathBuf::from("Roboto-Regular.ttf")));
        assert_eq!(cli.output_json, Some(PathBuf::from("roboto.json")));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["glyph_info_to_json", "-f", "a.otf", "-o", "a.json"]).unwrap();
        assert_eq!(cli.font_file, Some(PathBuf::from("a.otf")));
        assert_eq!(cli.output_json, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn test_flags_are_optional() {
        let cli = Cli::try_parse_from(["glyph_info_to_json"]).unwrap();
        assert_eq!(cli.font_file, None);
        assert_eq!(cli.output_json, None);
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = Cli::try_parse_from(["glyph_info_to_json", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_font_path_fails_downstream() {
        let result = glyphinfo::extract(&PathBuf::new(), &PathBuf::from("unused.json"));
        assert!(matches!(result, Err(glyphinfo::Error::FontLoad { .. })));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
