use crate::{
    cli::{CheckArgs, Cli, Commands, CommonArgs, ExportArgs, InitArgs, RenderArgs},
    config::Config,
    constants::DEFAULT_TEMPLATE,
    data::Dataset,
    error::{Error, Result},
    export::Exporter,
    ioutils::{load_template, save_template},
    prompt::confirm,
    source::fetch_rows,
    template::{classify, to_text, unknown_keys, unresolved_count, Template},
};

/// Main CLI runner: resolves settings, then executes one command
pub struct Runner {
    command: Commands,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { command: cli.command }
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Render(args) => run_render(args),
            Commands::Export(args) => run_export(args),
            Commands::Check(args) => run_check(args),
            Commands::Init(args) => run_init(args),
        }
    }
}

/// Settings of one run: the config file merged with command-line overrides.
struct Settings {
    config: Config,
}

impl Settings {
    fn resolve(common: &CommonArgs) -> Result<Self> {
        let mut config = match &common.config {
            Some(path) => Config::load_file(path)?,
            None => Config::discover(std::env::current_dir()?)?,
        };
        if let Some(source) = &common.source {
            config.source = Some(source.clone());
        }
        if let Some(template) = &common.template {
            config.template = Some(template.clone());
        }
        if let Some(timeout) = common.timeout {
            config.timeout_secs = timeout;
        }
        config.validate()?;
        Ok(Self { config })
    }

    fn template(&self) -> Result<Template> {
        let path = self.config.template.as_ref().ok_or_else(|| {
            Error::ConfigValidation("no template given; use --template or set `template`".into())
        })?;
        Ok(Template::parse(load_template(path)?))
    }

    fn dataset(&self) -> Result<Dataset> {
        let source = self.config.source.as_deref().ok_or_else(|| {
            Error::ConfigValidation("no data source given; use --source or set `source`".into())
        })?;
        fetch_rows(source, self.config.timeout())
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let settings = Settings::resolve(&args.common)?;
    let template = settings.template()?;
    let dataset = settings.dataset()?;

    let position = usize::try_from(args.row).unwrap_or(usize::MAX);
    let row = dataset.row(position - 1)?;

    match args.output {
        Some(output) => {
            let target = if output.is_dir() {
                output.join(settings.config.naming().single_file_name(position))
            } else {
                output
            };
            let exporter = Exporter::new(&template)
                .with_naming(settings.config.naming())
                .confirm_overwrite(!args.force);
            if exporter.export_one(row, position, &target)? {
                println!("Saved row {position} to {}.", target.display());
            }
        }
        None => {
            let segments = template.render(row);
            let unresolved = unresolved_count(&segments);
            if unresolved > 0 {
                log::warn!("Row {position} has {unresolved} unresolved placeholder(s)");
            }
            print!("{}", to_text(&segments));
        }
    }
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let settings = Settings::resolve(&args.common)?;
    let output_dir = args
        .output_dir
        .or_else(|| settings.config.output_dir.clone())
        .ok_or_else(|| {
            Error::ConfigValidation(
                "no output directory given; pass OUTPUT_DIR or set `output_dir`".into(),
            )
        })?;
    let name_column = args.name_column.or_else(|| settings.config.name_column.clone());

    let template = settings.template()?;
    let dataset = settings.dataset()?;

    let written = Exporter::new(&template)
        .with_naming(settings.config.naming())
        .confirm_overwrite(!args.force)
        .dry_run(args.dry_run)
        .export_dataset(&dataset, &output_dir, name_column.as_deref())?;

    if args.dry_run {
        println!("Dry run: {written} files would be written to {}.", output_dir.display());
    } else {
        println!("Exported {written} files to {}.", output_dir.display());
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let settings = Settings::resolve(&args.common)?;
    let template = settings.template()?;
    let schema = match settings.config.source {
        Some(_) => settings.dataset()?.schema().clone(),
        None => {
            log::warn!("No data source given; every placeholder is reported as unknown");
            Default::default()
        }
    };

    let highlights = classify(&template, &schema);
    for highlight in &highlights {
        let (line, column) = line_column(template.source(), highlight.span.start);
        println!(
            "{line}:{column}\t{}..{}\t{}\t{}",
            highlight.span.start, highlight.span.end, highlight.classification, highlight.key
        );
    }

    let unknown = unknown_keys(&template, &schema);
    if args.strict && !unknown.is_empty() {
        return Err(Error::UnknownPlaceholders(unknown.join(", ")));
    }
    Ok(())
}

fn run_init(args: InitArgs) -> Result<()> {
    let skip_prompt = args.force || !args.path.exists();
    if !confirm(skip_prompt, format!("Overwrite {}?", args.path.display()))? {
        log::info!("Keeping existing '{}'", args.path.display());
        return Ok(());
    }
    save_template(DEFAULT_TEMPLATE, &args.path)?;
    println!("Template written to {}.", args.path.display());
    Ok(())
}

/// 1-based line and character column of a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, source[line_start..offset].chars().count() + 1)
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli).run()
}
