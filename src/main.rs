use clap::Parser;
use eyre::WrapErr;
use std::path::PathBuf;
use std::sync::Arc;
use wikicourselib::core::{Course, LineEnding, RenderConfig};
use wikicourselib::render::template::TemplateDictionary;
use wikicourselib::Engine;

use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(clap::Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(long, default_value = "config/templates", env = "WIKICOURSE_TEMPLATES")]
    template_dir: PathBuf,

    /// One of cr, lf, crlf
    #[clap(long, default_value = "cr", env = "WIKICOURSE_LINE_ENDING")]
    line_ending: LineEnding,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Render a course record (JSON) into wikitext
    Render(RenderOptions),
    /// Check that a template file loads and list its templates
    Templates { platform: String, language: String },
}

#[derive(clap::Args, Debug)]
struct RenderOptions {
    /// Course record to render
    course: PathBuf,

    /// Dashboard the courses belong to
    #[clap(long, env = "DASHBOARD_URL")]
    dashboard_url: String,

    /// Wiki page prefix for course assignment pages
    #[clap(long, env = "COURSE_PREFIX")]
    course_prefix: String,

    /// Write the page here instead of stdout
    #[clap(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), eyre::Report> {
    dotenv::dotenv().ok();
    color_eyre::install()?;

    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wikicourse=info,wikicourselib=info")),
        )
        // the rendered page goes to stdout
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Render(opt) => {
            let config = Arc::new(RenderConfig {
                dashboard_url: opt.dashboard_url,
                course_prefix: opt.course_prefix,
                template_dir: args.template_dir,
                line_ending: args.line_ending,
            });

            let raw = std::fs::read_to_string(&opt.course).wrap_err_with(|| {
                format!("failed to read course record '{}'", opt.course.display())
            })?;
            let course: Course = serde_json::from_str(&raw).wrap_err_with(|| {
                format!("failed to parse course record '{}'", opt.course.display())
            })?;

            let engine = Engine::new(config, &course)?;
            let page = engine.render_default()?;

            match opt.output {
                Some(path) => {
                    std::fs::write(&path, &page)
                        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
                    info!(course = %course.slug, path = %path.display(), "wrote course page");
                }
                None => print!("{page}"),
            }
        }
        Command::Templates { platform, language } => {
            let templates = TemplateDictionary::load(&args.template_dir, &platform, &language)?;
            for (key, name) in templates.iter() {
                println!("{key} = {name}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {

    #![allow(warnings, unused)]
    use super::*;

    #[test]
    fn templates_command_needs_no_render_settings() {
        let args = Args::try_parse_from([
            "wikicourse",
            "--template-dir",
            "config/templates",
            "templates",
            "dashboard.wikiedu.org",
            "en",
        ])
        .unwrap();

        assert!(matches!(
            args.command,
            Command::Templates { ref platform, ref language }
                if platform == "dashboard.wikiedu.org" && language == "en"
        ));
    }

    #[test]
    fn render_command_takes_dashboard_and_prefix() {
        let args = Args::try_parse_from([
            "wikicourse",
            "render",
            "course.json",
            "--dashboard-url",
            "dashboard.wikiedu.org",
            "--course-prefix",
            "Wikipedia:Wiki_Ed",
        ])
        .unwrap();

        match args.command {
            Command::Render(opt) => {
                assert_eq!(opt.course, PathBuf::from("course.json"));
                assert_eq!(opt.dashboard_url, "dashboard.wikiedu.org");
                assert_eq!(opt.course_prefix, "Wikipedia:Wiki_Ed");
            }
            other => panic!("expected render command, got {other:?}"),
        }
    }
}
