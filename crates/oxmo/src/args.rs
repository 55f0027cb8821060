use clap::{Parser, Subcommand};

use crate::{config::Config, convert::Convert};

pub trait RunCommand {
    /// # Errors
    ///
    /// If any part of the lifecycle fails
    /// * Fails to read or parse the document or config
    /// * Fails to write the model
    fn run(&self, config: Config) -> anyhow::Result<()>;
}

#[derive(Parser, Debug)]
#[clap(
    bin_name = "oxmo",
    name = "oxmo",
    author,
    version,
    about = "Draw Modelica icons with your vector-graphics editor",
    long_about = None
)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an SVG document into a Modelica model with an icon annotation
    Convert(Convert),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use oxmo_annotation::Indent;
    use oxmo_convert::TextExtent;
    use pretty_assertions::assert_eq;

    use super::{Args, Command};

    #[test]
    fn convert_flags() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "oxmo", "convert", "icon.svg", "-o", "Icon.mo", "-m", "Resistor", "-s", "-n", "-t",
            "flow", "-p", "tabs",
        ])?;
        let Command::Convert(convert) = args.command;
        assert_eq!(convert.path.as_deref(), Some(Path::new("icon.svg")));
        assert_eq!(convert.output.as_deref(), Some(Path::new("Icon.mo")));
        assert_eq!(convert.model_name.as_deref(), Some("Resistor"));
        assert!(convert.strict);
        assert!(convert.normalize_extent);
        assert_eq!(convert.text_extent, Some(TextExtent::Flow));
        assert_eq!(convert.indent, Some(Indent::Tabs));
        assert!(convert.config.is_none());
        Ok(())
    }

    #[test]
    fn convert_stdin() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["oxmo", "convert", "--config"])?;
        let Command::Convert(convert) = args.command;
        assert!(convert.path.is_none());
        assert_eq!(convert.config, Some(vec![]));
        assert!(!convert.strict);

        assert!(Args::try_parse_from(["oxmo", "convert", "-p", "wide"]).is_err());
        Ok(())
    }
}
