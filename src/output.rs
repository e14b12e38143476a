//! User-facing messages.
//! Progress goes to stdout next to the overwrite prompt; warnings and errors
//! go to stderr. Prefixes are coloured only when stdout is a terminal.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

#[derive(Clone, Copy)]
enum Tag {
    Info,
    Warn,
    Error,
    Ok,
}

fn tagged(tag: Tag, msg: &str) -> String {
    let label = match tag {
        Tag::Info => "info:",
        Tag::Warn => "warn:",
        Tag::Error => "error:",
        Tag::Ok => "ok:",
    };
    if !is_tty() {
        return format!("{label} {msg}");
    }
    match tag {
        Tag::Info => format!("{} {}", label.cyan().bold(), msg),
        Tag::Warn => format!("{} {}", label.yellow().bold(), msg),
        Tag::Error => format!("{} {}", label.red().bold(), msg),
        Tag::Ok => format!("{} {}", label.green().bold(), msg),
    }
}

pub fn print_info(msg: &str) {
    println!("{}", tagged(Tag::Info, msg));
}

pub fn print_warn(msg: &str) {
    eprintln!("{}", tagged(Tag::Warn, msg));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", tagged(Tag::Error, msg));
}

pub fn print_success(msg: &str) {
    println!("{}", tagged(Tag::Ok, msg));
}

/// Plain line, no prefix (e.g. "File: a.txt" while walking a batch).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
