mod args;

use std::sync::Arc;

use ansi_term::Colour;
use args::{InputArgs, OutputArgs};
use clap::Parser;

use bindle::{Bundler, BundlerOptions};
use bindle_ecmascript::EcmaProcessor;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn main() {
  let commands = Commands::parse();

  let options = BundlerOptions {
    input: Some(commands.input.entry),
    cwd: commands.input.cwd,
    default_extension: commands.input.default_extension,
    fail_on_unresolved: Some(commands.output.strict),
  };

  let mut bundler = Bundler::new(options, Arc::new(EcmaProcessor));

  let output = match bundler.build() {
    Ok(output) => output,
    Err(errors) => {
      for error in errors.iter() {
        eprintln!("{} {error}", Colour::Red.paint("error:"));
      }
      std::process::exit(1);
    }
  };

  // Build-time failures on dependencies degrade to warnings; the bundle is
  // still emitted and only fails at runtime if the broken specifier is
  // actually required.
  for warning in &output.warnings {
    eprintln!("{} {warning}", Colour::Yellow.paint("warning:"));
  }

  match commands.output.file {
    Some(file) => {
      if let Err(error) = std::fs::write(&file, &output.code) {
        eprintln!("{} Failed to write {} - {error}", Colour::Red.paint("error:"), file.display());
        std::process::exit(1);
      }
    }
    None => println!("{}", output.code),
  }
}
