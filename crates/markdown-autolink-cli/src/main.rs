use anyhow::Result;
use markdown_autolink_config::Config;
use markdown_autolink_engine::{EscapeContext, EscapeOptions, LiteralEscaper};
use std::{
    env,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    texts: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => parsed.config = Some(PathBuf::from(path)),
                None => return Err("--config needs a path".to_string()),
            },
            "--" => {
                parsed.texts.extend(args);
                break;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ => parsed.texts.push(arg),
        }
    }
    Ok(parsed)
}

fn load_options(config: Option<PathBuf>) -> Result<EscapeOptions, String> {
    let config_path = config
        .map(|path| Config::expand_path(&path).unwrap_or(path))
        .unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!("No config file, using default literal options");
            return Ok(EscapeOptions::default());
        }
        Err(e) => return Err(format!("Failed to load config file: {e}")),
    };

    config.literals.validated().map_err(|e| {
        format!(
            "Config file '{}' is invalid: {e}",
            config_path.display()
        )
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "markdown-autolink-cli".to_string());

    let args = match parse_args(args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} [--config PATH] [TEXT...]");
            process::exit(1);
        }
    };

    let options = match load_options(args.config) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let escaper = LiteralEscaper::new(options);
    let ctx = EscapeContext::standalone();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            writeln!(out, "{}", escaper.escape(&line, &ctx))?;
        }
    } else {
        for text in &args.texts {
            writeln!(out, "{}", escaper.escape(text, &ctx))?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parses_config_and_texts() {
        let parsed = parse_args(args(&["--config", "c.toml", "a@b.c", "www.x.y"])).unwrap();
        assert_eq!(
            parsed,
            Args {
                config: Some(PathBuf::from("c.toml")),
                texts: args(&["a@b.c", "www.x.y"]),
            }
        );
    }

    #[test]
    fn double_dash_ends_options() {
        let parsed = parse_args(args(&["--", "--config"])).unwrap();
        assert_eq!(parsed.config, None);
        assert_eq!(parsed.texts, args(&["--config"]));
    }

    #[test]
    fn rejects_bad_options() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn missing_config_file_means_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let options = load_options(Some(temp_dir.path().join("none.toml"))).unwrap();
        assert_eq!(options, EscapeOptions::default());
    }

    #[test]
    fn invalid_scheme_in_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "protocols = [\"not a scheme\"]\n").unwrap();

        let err = load_options(Some(config_file)).unwrap_err();
        assert!(err.contains("is invalid"), "{err}");
    }
}
