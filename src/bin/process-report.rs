//! CLI tool to load a process export, write sorted copies and print reports.
//!
//! Usage:
//!   process-report <processos.csv>
//!   process-report <processos.csv> --sort id --sort date -d out/
//!
//! Reports go to stdout, diagnostics to stderr (`RUST_LOG` controls the level).

use std::path::PathBuf;
use std::process;

use clap::Parser;
use process_records::config::{DEFAULT_CLASS_ID, DEFAULT_PREVIEW_ROWS, DEFAULT_PROCESS_ID};
use process_records::{LookupError, RecordStore, RunConfig, SortKey, export_csv, format_table};
use tracing::{error, info};

/// Sort, export and summarise a legal-process record export.
#[derive(Parser)]
#[command(name = "process-report")]
struct Cli {
    /// Process export file (header line followed by one record per line)
    input: PathBuf,

    /// Directory for the sorted exports (default: next to the input)
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Class id to count processes for
    #[arg(long, default_value_t = DEFAULT_CLASS_ID)]
    class_id: i64,

    /// Process id to report elapsed days for
    #[arg(long, default_value_t = DEFAULT_PROCESS_ID)]
    process_id: i64,

    /// Rows shown in each preview table
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview: usize,

    /// Orderings to apply and export, in turn (default: id, date)
    #[arg(short, long, value_enum)]
    sort: Vec<SortKey>,

    /// Log debug diagnostics, including every dropped row
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.input);
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        config.class_id = self.class_id;
        config.process_id = self.process_id;
        config.preview_rows = self.preview;
        if !self.sort.is_empty() {
            config.sorts = self.sort;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = cli.into_config();

    let (mut store, report) = match RecordStore::load(&config.input) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    if report.rejected_count() > 0 {
        info!(
            "{} of {} rows dropped",
            report.rejected_count(),
            report.lines_read
        );
    }

    println!("Número de processos lidos: {}", store.len());
    print!("{}", format_table(store.as_slice(), 0, config.preview_rows));

    for key in &config.sorts {
        match key {
            SortKey::Id => println!("\n1. Processos ordenados por id (crescente)"),
            SortKey::DateDesc => {
                println!("\n2. Processos ordenados por data de ajuizamento (decrescente)")
            }
        }
        store.sort(*key);

        let path = config.export_path(*key);
        if let Err(e) = export_csv(&path, store.as_slice()) {
            error!("{e}");
        }
        print!("{}", format_table(store.as_slice(), 0, config.preview_rows));
    }

    println!(
        "\n3. Quantidade de processos com id_classe {}: {}",
        config.class_id,
        store.count_by_class(config.class_id)
    );

    println!(
        "\n4. Quantidade de id_assuntos distintos: {}",
        store.count_distinct_subjects()
    );

    println!(
        "\n5. Processos com mais de um assunto: {}",
        store.count_multi_subject()
    );
    let listed: Vec<String> = store
        .multi_subject_records()
        .take(config.preview_rows)
        .map(|r| r.id().to_string())
        .collect();
    if !listed.is_empty() {
        println!("   Primeiros: {}", listed.join(", "));
    }

    println!();
    match store.days_since_now(config.process_id) {
        Ok(days) => println!(
            "6. O processo {} está em tramitação na justiça há {} dias",
            config.process_id, days
        ),
        Err(LookupError::NotFound { id }) => {
            println!("6. Processo {id} não encontrado")
        }
        Err(LookupError::InvalidDate { id, raw }) => {
            println!("6. Processo {id} tem data de ajuizamento inválida: '{raw}'")
        }
    }
}
