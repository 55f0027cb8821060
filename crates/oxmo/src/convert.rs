use std::{
    io::{Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use oxmo_annotation::Indent;
use oxmo_convert::{convert, Options, TextExtent};

use crate::{args::RunCommand, config::Config};

#[derive(clap::Args, Debug)]
pub struct Convert {
    /// The SVG document to convert.
    /// Reads from stdin when omitted.
    #[clap(value_parser)]
    pub path: Option<PathBuf>,
    /// The file to write the model to.
    /// Defaults to stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
    /// The name of the generated model
    #[clap(long, short)]
    pub model_name: Option<String>,
    /// Fail on features with no Modelica equivalent, instead of approximating or skipping them
    #[clap(long, short, default_value = "false")]
    pub strict: bool,
    /// Scale and centre the coordinate system to the Modelica default of 200 by 200 units
    #[clap(long, short, default_value = "false")]
    pub normalize_extent: bool,
    /// How the extent of text is estimated
    #[clap(long, short)]
    pub text_extent: Option<TextExtent>,
    /// The indentation of the output, either `tabs` or a number of spaces
    #[clap(long, short = 'p')]
    pub indent: Option<Indent>,
    /// A path to the specified config.
    /// If no config is specified the current config will be printed instead.
    #[clap(long, short, num_args(0..=1))]
    pub config: Option<Vec<PathBuf>>,
}

impl RunCommand for Convert {
    fn run(&self, config: Config) -> anyhow::Result<()> {
        let Some(config) = self.handle_config(config)? else {
            return Ok(());
        };
        let options = self.options(config.convert.unwrap_or_default());

        let source = self.read_source()?;
        let model = convert(&source, &options).with_context(|| match &self.path {
            Some(path) => format!("cannot convert {}", path.display()),
            None => String::from("cannot convert stdin"),
        })?;
        self.write_model(&model)
    }
}

impl Convert {
    /// Loads the config from well-known paths, unless a path is given with `--config`
    ///
    /// # Errors
    /// When the inferred config exists but cannot be parsed
    pub fn inferred_config(&self) -> anyhow::Result<Config> {
        if self.config_path().is_some() {
            log::debug!("skipping inferred config");
            return Ok(Config::default());
        }
        Config::load()
    }

    fn config_path(&self) -> Option<&PathBuf> {
        self.config.as_ref().and_then(|paths| paths.first())
    }

    /// Applies the given flags over the configured options
    fn options(&self, mut options: Options) -> Options {
        if let Some(model_name) = &self.model_name {
            options.model_name.clone_from(model_name);
        }
        options.strict |= self.strict;
        options.normalize_extent |= self.normalize_extent;
        if let Some(text_extent) = self.text_extent {
            options.text_extent = text_extent;
        }
        if let Some(indent) = self.indent {
            options.indent = indent;
        }
        options
    }

    fn handle_config(&self, config: Config) -> anyhow::Result<Option<Config>> {
        if self.config.is_none() {
            log::debug!("using inferred config");
            return Ok(Some(config));
        }
        if let Some(config_path) = self.config_path() {
            log::debug!("using specified config");
            let file = std::fs::read_to_string(config_path)
                .with_context(|| format!("cannot read {}", config_path.display()))?;
            Config::parse(&file)
                .with_context(|| format!("configuration at {} cannot be parsed", config_path.display()))
                .map(Some)
        } else {
            log::debug!("printing config");
            let config = Config {
                convert: Some(self.options(config.convert.unwrap_or_default())),
            };
            let mut stdout = std::io::stdout();
            serde_json::to_writer_pretty(&mut stdout, &config)?;
            writeln!(stdout)?;
            Ok(None)
        }
    }

    fn read_source(&self) -> anyhow::Result<String> {
        if let Some(path) = &self.path {
            return std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()));
        }
        log::debug!("reading from stdin");
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    }

    fn write_model(&self, model: &str) -> anyhow::Result<()> {
        let Some(output) = &self.output else {
            std::io::stdout().write_all(model.as_bytes())?;
            return Ok(());
        };
        if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, model).with_context(|| format!("cannot write {}", output.display()))?;
        log::info!("wrote {}", output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use oxmo_annotation::Indent;
    use oxmo_convert::{Options, TextExtent};
    use pretty_assertions::assert_eq;

    use crate::{
        args::{Args, Command},
        config::Config,
    };

    fn parse(args: &[&str]) -> anyhow::Result<super::Convert> {
        let args = Args::try_parse_from(["oxmo", "convert"].iter().chain(args))?;
        let Command::Convert(convert) = args.command;
        Ok(convert)
    }

    #[test]
    fn explicit_config() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join("oxmo-explicit-config.json");
        std::fs::write(&path, r#"{ "convert": { "modelName": "Explicit" } }"#)?;
        let convert = parse(&["-c", path.to_str().unwrap()])?;

        assert_eq!(convert.inferred_config()?, Config::default());
        let config = convert.handle_config(Config::default())?.unwrap();
        assert_eq!(
            config.convert.map(|options| options.model_name),
            Some(String::from("Explicit"))
        );
        std::fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn flags_override_config() -> anyhow::Result<()> {
        let configured = Options {
            model_name: String::from("Configured"),
            strict: true,
            text_extent: TextExtent::Scaled,
            ..Options::default()
        };

        assert_eq!(parse(&[])?.options(configured.clone()), configured);
        assert_eq!(
            parse(&["-m", "Flagged", "-n", "-t", "normal", "-p", "4"])?.options(configured),
            Options {
                model_name: String::from("Flagged"),
                strict: true,
                normalize_extent: true,
                text_extent: TextExtent::Normal,
                indent: Indent::Spaces(4),
            }
        );
        Ok(())
    }
}
