use clap::{Arg, ArgAction, ArgMatches, Command};
use lexmap::{
    Config, Dictionary, DictionaryStore, LexError, Token, Translator, dictionary_to_json,
    load_dictionary_from_file, tokenize,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("lexmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rule-based word and phrase substitution")
        .subcommand_required(true)
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .help("Path of the persisted dictionary (default: $LEXMAP_STORE or lexmap-dictionary.json)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log dictionary and translation details to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate text (reads stdin when no text is given)")
                .arg(Arg::new("text").help("Text to translate").index(1))
                .arg(
                    Arg::new("prefer-phrases")
                        .long("prefer-phrases")
                        .short('p')
                        .help("Try a whole-input phrase match before word-by-word translation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("mark-unknown")
                        .long("mark-unknown")
                        .short('m')
                        .help("Wrap words missing from the dictionary in [brackets]")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("dictionary")
                        .long("dictionary")
                        .short('d')
                        .help("Use this JSON dictionary instead of the stored one"),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .short('r')
                        .help("Print unknown words to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Show how text is split into tokens")
                .arg(Arg::new("text").help("Text to tokenize").index(1)),
        )
        .subcommand(
            Command::new("add")
                .about("Merge 'left = right' lines into the stored dictionary")
                .arg(Arg::new("file").help("File with one mapping per line (default: stdin)").index(1)),
        )
        .subcommand(
            Command::new("import")
                .about("Merge a JSON dictionary file into the stored dictionary")
                .arg(Arg::new("file").help("JSON dictionary file").required(true).index(1)),
        )
        .subcommand(Command::new("export").about("Print the stored dictionary as JSON"))
        .subcommand(Command::new("reset").about("Restore the built-in dictionary"))
        .subcommand(Command::new("stats").about("Show dictionary entry counts"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env();
    if let Some(path) = matches.get_one::<String>("store") {
        config.store_path = PathBuf::from(path);
    }
    debug!("Using dictionary store {}", config.store_path.display());
    let store = DictionaryStore::new(&config.store_path);

    match matches.subcommand() {
        Some(("translate", sub)) => run_translate(sub, config, &store)?,
        Some(("tokenize", sub)) => {
            let text = text_or_stdin(sub.get_one::<String>("text"))?;
            for token in tokenize(&text) {
                match token {
                    Token::Word(word) => println!("word\t{:?}", word),
                    Token::Separator(sep) => println!("sep\t{:?}", sep),
                }
            }
        }
        Some(("add", sub)) => {
            let raw = match sub.get_one::<String>("file") {
                Some(file) => read_file(Path::new(file))?,
                None => read_stdin()?,
            };
            let mut dictionary = store.load()?;
            let summary = dictionary.merge_lines(&raw);
            store.save(&dictionary)?;
            println!("Added {} entries", summary.added());
            if summary.skipped > 0 {
                eprintln!("Skipped {} lines without a 'left = right' mapping", summary.skipped);
            }
        }
        Some(("import", sub)) => {
            let file = sub
                .get_one::<String>("file")
                .ok_or_else(|| LexError::Config("missing dictionary file".to_string()))?;
            let incoming = load_dictionary_from_file(Path::new(file))?;
            let mut dictionary = store.load()?;
            let count = dictionary.merge(incoming);
            store.save(&dictionary)?;
            println!("Imported {} entries", count);
        }
        Some(("export", _)) => {
            println!("{}", dictionary_to_json(&store.load()?)?);
        }
        Some(("reset", _)) => {
            let dictionary = store.reset()?;
            println!(
                "Restored built-in dictionary ({} words, {} phrases)",
                dictionary.word_count(),
                dictionary.phrase_count()
            );
        }
        Some(("stats", _)) => {
            let dictionary = store.load()?;
            println!("words\t{}", dictionary.word_count());
            println!("phrases\t{}", dictionary.phrase_count());
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}

fn run_translate(
    matches: &ArgMatches,
    mut config: Config,
    store: &DictionaryStore,
) -> Result<(), Box<dyn std::error::Error>> {
    config.options.prefer_phrases |= matches.get_flag("prefer-phrases");
    config.options.mark_unknown |= matches.get_flag("mark-unknown");

    let dictionary: Dictionary = match matches.get_one::<String>("dictionary") {
        Some(file) => load_dictionary_from_file(Path::new(file))?,
        None => store.load()?,
    };
    let text = text_or_stdin(matches.get_one::<String>("text"))?;

    let translator = Translator::new(&dictionary, config.options);
    let report = translator.translate_with_report(&text);
    print!("{}", report.text);
    if !report.text.ends_with('\n') {
        println!();
    }

    if matches.get_flag("report") {
        if report.phrase_match {
            eprintln!("Matched a dictionary phrase");
        } else {
            eprintln!(
                "Translated {} words, {} unknown",
                report.translated_words,
                report.unknown.len()
            );
            for word in &report.unknown {
                eprintln!("  {}", word);
            }
        }
    }

    Ok(())
}

fn text_or_stdin(text: Option<&String>) -> Result<String, LexError> {
    match text {
        Some(text) => Ok(text.clone()),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String, LexError> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| LexError::io(Path::new("<stdin>"), e))?;
    Ok(buffer)
}

fn read_file(path: &Path) -> Result<String, LexError> {
    std::fs::read_to_string(path).map_err(|e| LexError::io(path, e))
}
