// dmetaphone-match: Report whether two words sound alike.
//
// Prints the codes of both words followed by "match" or "no match". Two
// words match when they share a primary or alternate code.
//
// Usage:
//   dmetaphone-match [OPTIONS] WORD1 WORD2
//
// Exit status is 0 on match, 1 otherwise (including usage errors).

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if dmetaphone_cli::wants_help(&args) {
        println!("dmetaphone-match: Report whether two words sound alike.");
        println!();
        println!("Usage: dmetaphone-match [OPTIONS] WORD1 WORD2");
        println!();
        println!("Exit status is 0 when the words share a code, 1 otherwise.");
        println!();
        println!("Options:");
        println!("  -n, --max-len N   Truncate codes to N characters");
        println!("  --classic         Classic four-character codes (same as -n 4)");
        println!("  --fold            Fold diacritics and uppercase before encoding");
        println!("  -v, --verbose     Debug logging on stderr");
        println!("  -h, --help        Print this help");
        return;
    }

    let (options, words) = dmetaphone_cli::parse_options(&args)
        .unwrap_or_else(|e| dmetaphone_cli::fatal(&e.to_string()));
    dmetaphone_cli::init_logging(options.verbose);

    let [first, second] = words.as_slice() else {
        dmetaphone_cli::fatal("expected exactly two words (see --help)");
    };

    let a = options.encode(first);
    let b = options.encode(second);
    println!("{first}\t{a}");
    println!("{second}\t{b}");

    if a.matches(&b) {
        println!("match");
    } else {
        println!("no match");
        process::exit(1);
    }
}
