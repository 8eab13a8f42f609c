//! The generation pipeline, stage by stage
//!
//! Strictly sequential: prompts, preflight, bootstrap, template
//! composition, dependency installation, platform post-processing, manifest
//! finalization. The first failing stage aborts the whole run; nothing is
//! retried and nothing is rolled back.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::deps::{self, DependencyPlan};
use crate::init;
use crate::manifest;
use crate::options::{ProjectName, ProjectOptions};
use crate::platform;
use crate::process::CommandRunner;
use crate::prompt::Prompter;
use crate::runtime;
use crate::templates::{self, TemplateStore};

/// One generation run: the command runner, the template store, and the host
/// the run executes on.
pub struct Generator<'a, R: CommandRunner> {
    runner: &'a R,
    store: TemplateStore,
    host_os: &'static str,
}

impl<'a, R: CommandRunner> Generator<'a, R> {
    pub fn new(runner: &'a R, store: TemplateStore) -> Self {
        Self {
            runner,
            store,
            host_os: std::env::consts::OS,
        }
    }

    /// Override the detected host OS. Tests use this to exercise the
    /// platform branch on any machine.
    pub fn with_host_os(mut self, host_os: &'static str) -> Self {
        self.host_os = host_os;
        self
    }

    /// Run the whole generation sequence for `name`, reading answers from
    /// `input` and writing prompts to `output`.
    pub fn run<I: BufRead, O: Write>(&self, name: ProjectName, input: I, output: O) -> Result<()> {
        println!("{}", "React Native Bootstrap".cyan().bold());
        println!();

        let answers = Prompter::new(input, output).collect()?;
        let options = ProjectOptions {
            name,
            use_expo: answers.use_expo,
            with_storybook: answers.with_storybook,
            with_detox: answers.with_detox,
        };
        describe(&options);

        stage("Checking tooling");
        let needs_pods = platform::needs_pod_install(&options, self.host_os);
        let tooling = runtime::preflight(self.runner, needs_pods)?;
        for info in &tooling {
            println!("   {}", info);
        }

        stage("Initializing project");
        let project_root = init::initialize_project(self.runner, &options)?;

        stage("Composing template files");
        let groups = templates::selected_groups(&options);
        let copied = templates::copy_groups(&self.store, &project_root, &groups)?;
        println!("   {} files copied", copied.len());

        stage("Installing dependencies");
        let plan = DependencyPlan::for_options(&options);
        deps::install(self.runner, &plan)?;

        stage("Configuring platform");
        if platform::install_ios_pods(self.runner, &options, &project_root, self.host_os)? {
            println!("   iOS pods installed");
        } else {
            println!("   no platform steps required");
        }

        stage("Finalizing manifest");
        manifest::finalize_manifest(&project_root)?;

        print_completion(&options, &project_root);
        Ok(())
    }
}

fn stage(title: &str) {
    println!();
    println!("{} {}", "=>".cyan().bold(), title);
}

fn describe(options: &ProjectOptions) {
    let framework = if options.use_expo {
        "Expo"
    } else {
        "React Native CLI"
    };
    println!();
    println!("{}", "Project configuration".bold());
    println!("   framework: {}", framework);
    println!("   storybook: {}", yes_no(options.with_storybook));
    println!("   detox:     {}", yes_no(options.with_detox));
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_completion(options: &ProjectOptions, project_root: &Path) {
    let mut steps = vec![
        format!("cd {}", project_root.display()),
        "npm start".to_string(),
        "npm run ios / npm run android".to_string(),
        "npm test".to_string(),
    ];
    if options.with_storybook {
        steps.push("npm run storybook".to_string());
    }
    if options.with_detox {
        steps.push("npm run test:e2e".to_string());
    }

    println!();
    println!(
        "{} {}",
        "Created".green().bold(),
        options.name.as_str()
    );
    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
    println!("{}", "Happy coding!".cyan());
}
