// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Quotidie v{} - Daily quote desktop notifier",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--now] [--root <path>]", binary_name);
    println!("    {} --install <HH:MM> [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --now                 Show a quote notification immediately (default action).");
    println!("    --install <HH:MM>     Install a daily scheduled task at the given time");
    println!("                          (24-hour format, Windows only).");
    println!("    -r, --root <path>     Use a different directory for the quote store and logs.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("FILES:");
    println!("    quotes.json           Quote store, next to the executable (or under --root).");
    println!("                          A JSON array of records; accepted keys are");
    println!("                          text/quote/q for the text and author/a for attribution.");
    println!("    logs/quotes_log.csv   Append-only history of every quote selected.");
    println!("    config.toml           Optional: notification title and display duration.");
    println!();
    println!("EXAMPLES:");
    println!("    {}                    Pop up a quote right now", binary_name);
    println!("    {} --install 09:00    Show a quote every morning at nine", binary_name);
    println!();
    println!("NOTES:");
    println!("    When both --now and --install are given, both actions run and the");
    println!("    installer's exit code is reported.");
}
