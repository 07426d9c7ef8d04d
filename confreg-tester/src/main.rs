mod scenarios;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use scenarios::{browser_scenarios, logic_scenarios};
use std::process::ExitCode;
use std::time::Instant;
use thirtyfour::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TestMode {
    /// Pure rule-engine checks (fast, no browser)
    Logic,
    /// Browser automation against a served build (needs a WebDriver)
    Browser,
    /// Run both suites
    Both,
}

impl TestMode {
    const fn includes_logic(self) -> bool {
        matches!(self, Self::Logic | Self::Both)
    }

    const fn includes_browser(self) -> bool {
        matches!(self, Self::Browser | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HeadlessMode {
    /// Run the browser without a window
    Headless,
    /// Run the browser with a visible window
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "confreg-tester", version)]
#[command(about = "Automated QA for the Confreg registration form")]
struct Args {
    /// Which suites to run
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Base URL of a served confreg-web build
    #[arg(long, default_value = "http://localhost:8080")]
    url: String,

    /// WebDriver endpoint for browser mode
    #[arg(long, default_value = "http://localhost:9515")]
    webdriver_url: String,

    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,

    /// Only run scenarios whose name contains this substring
    #[arg(long)]
    filter: Option<String>,

    /// List scenarios without running anything
    #[arg(long)]
    list: bool,
}

impl Args {
    fn selected(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|needle| name.contains(needle))
    }
}

fn list_scenarios(args: &Args) {
    for scenario in logic_scenarios() {
        if args.selected(scenario.name) {
            println!("logic    {}", scenario.name);
        }
    }
    for scenario in browser_scenarios() {
        if args.selected(scenario.name()) {
            println!("browser  {}", scenario.name());
        }
    }
}

fn report(name: &str, started: Instant, outcome: &Result<()>) -> bool {
    let elapsed = started.elapsed();
    match outcome {
        Ok(()) => {
            println!("{} {name} ({elapsed:.2?})", "PASS".green().bold());
            true
        }
        Err(err) => {
            println!("{} {name} ({elapsed:.2?}): {err:#}", "FAIL".red().bold());
            false
        }
    }
}

fn run_logic(args: &Args) -> usize {
    let mut failures = 0;
    for scenario in logic_scenarios() {
        if !args.selected(scenario.name) {
            continue;
        }
        log::debug!("running logic scenario {}", scenario.name);
        let started = Instant::now();
        let outcome = (scenario.run)();
        if !report(scenario.name, started, &outcome) {
            failures += 1;
        }
    }
    failures
}

async fn run_browser(args: &Args) -> Result<usize> {
    let mut caps = DesiredCapabilities::chrome();
    if args.headless.is_headless() {
        caps.set_headless().context("configuring headless mode")?;
    }
    let driver = WebDriver::new(&args.webdriver_url, caps)
        .await
        .with_context(|| format!("connecting to WebDriver at {}", args.webdriver_url))?;

    let mut failures = 0;
    for scenario in browser_scenarios() {
        if !args.selected(scenario.name()) {
            continue;
        }
        log::debug!("running browser scenario {}", scenario.name());
        // Each scenario starts from a freshly loaded form.
        driver
            .goto(&args.url)
            .await
            .with_context(|| format!("loading {}", args.url))?;
        let started = Instant::now();
        let outcome = scenario.run(&driver).await;
        if !report(scenario.name(), started, &outcome) {
            failures += 1;
        }
    }

    driver.quit().await.context("shutting down the browser")?;
    Ok(failures)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        list_scenarios(&args);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "confreg-tester run {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let mut failures = 0;
    if args.mode.includes_logic() {
        failures += run_logic(&args);
    }
    if args.mode.includes_browser() {
        failures += run_browser(&args).await?;
    }

    if failures == 0 {
        println!("{}", "all scenarios passed".green());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", format!("{failures} scenario(s) failed").red());
        Ok(ExitCode::FAILURE)
    }
}
