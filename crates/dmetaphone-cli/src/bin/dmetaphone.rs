// dmetaphone: Print Double Metaphone codes for words.
//
// Encodes each word given on the command line, or each line of stdin when
// no words are given. Output is one line per word:
//   WORD<TAB>PRIMARY<TAB>ALTERNATE
//
// Usage:
//   dmetaphone [OPTIONS] [WORD...]
//
// Options:
//   -n, --max-len N   Truncate codes to N characters
//   --classic         Classic four-character codes (same as -n 4)
//   --fold            Fold diacritics and uppercase before encoding
//   --json            Print one JSON object per word
//   -v, --verbose     Debug logging on stderr
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use dmetaphone_cli::{CliError, CliOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if dmetaphone_cli::wants_help(&args) {
        println!("dmetaphone: Print Double Metaphone codes for words.");
        println!();
        println!("Usage: dmetaphone [OPTIONS] [WORD...]");
        println!();
        println!("Encodes each WORD, or each line of stdin when no words are given.");
        println!("Prints: WORD<TAB>PRIMARY<TAB>ALTERNATE");
        println!();
        println!("Options:");
        println!("  -n, --max-len N   Truncate codes to N characters");
        println!("  --classic         Classic four-character codes (same as -n 4)");
        println!("  --fold            Fold diacritics and uppercase before encoding");
        println!("  --json            Print one JSON object per word");
        println!("  -v, --verbose     Debug logging on stderr");
        println!("  -h, --help        Print this help");
        return;
    }

    let (options, words) = dmetaphone_cli::parse_options(&args)
        .unwrap_or_else(|e| dmetaphone_cli::fatal(&e.to_string()));
    dmetaphone_cli::init_logging(options.verbose);

    if let Err(e) = run(&options, &words) {
        dmetaphone_cli::fatal(&e.to_string());
    }
}

fn run(options: &CliOptions, words: &[String]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        log::debug!("reading words from stdin");
        for line in io::stdin().lock().lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            print_word(&mut out, options, word)?;
        }
    } else {
        for word in words {
            print_word(&mut out, options, word)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn print_word(out: &mut impl Write, options: &CliOptions, word: &str) -> Result<(), CliError> {
    let code = options.encode(word);
    writeln!(out, "{}", dmetaphone_cli::format_line(word, &code, options.json)?)?;
    Ok(())
}
