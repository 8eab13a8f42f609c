//! rn-bootstrap - generate a preconfigured React Native project

use anyhow::Result;
use clap::Parser;
use rn_bootstrap_core::{Generator, ProjectName, ShellRunner, TemplateStore};

#[derive(Parser, Debug)]
#[command(name = "rn-bootstrap")]
#[command(about = "Generate a React Native project with batteries included")]
#[command(version)]
struct Args {
    /// Name of the project to create (letters and numbers, letter first)
    project_name: Option<String>,
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // Validate before anything else: a bad name must exit before a single
    // prompt is asked or command is run.
    let raw = match args.project_name {
        Some(name) => name,
        None => {
            eprintln!("Usage: rn-bootstrap <ProjectName>");
            anyhow::bail!("missing project name");
        }
    };
    let name = ProjectName::parse(&raw)?;

    let runner = ShellRunner;
    let store = TemplateStore::locate()?;
    let generator = Generator::new(&runner, store);

    let stdin = std::io::stdin();
    let result = generator.run(name, stdin.lock(), std::io::stdout());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
