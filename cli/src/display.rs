use {
    crate::prelude::*,
    colored::ColoredString,
    indicatif::{ProgressBar, ProgressStyle},
    std::time::Duration,
};

/// Print a grey colored line to separate sections
pub(crate) fn separator() -> ColoredString {
    "\n-=-=-=-=-=-=-=-\n".truecolor(100, 100, 100)
}

/// Handle for one in-flight step of a command. [`LoadingHandle::success`] or
/// [`LoadingHandle::error`] replaces the spinner with a final status line.
pub(crate) struct LoadingHandle {
    bar: ProgressBar,
    message: String,
}

impl LoadingHandle {
    pub(crate) fn new(message: String) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.magenta} {msg}")
                .expect("Spinner template must parse."),
        );
        bar.set_message(message.clone());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar, message }
    }

    pub(crate) fn success(self) {
        self.bar.finish_and_clear();
        println!(
            "{check} {message}",
            check = "✓".green().bold(),
            message = self.message
        );
    }

    pub(crate) fn error(self) {
        self.bar.finish_and_clear();
        println!(
            "{cross} {message}",
            cross = "✗".red().bold(),
            message = self.message
        );
    }
}

/// Ask for a yes/no confirmation on stdin, defaulting to no.
pub(crate) fn confirm_prompt(message: &str) -> bool {
    use std::io::Write as _;

    print!(
        "{question} {message} {hint} ",
        question = "?".yellow().bold(),
        hint = "[y/N]".dimmed()
    );
    if std::io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print the title of the currently executed command.
#[macro_export]
macro_rules! command_title {
    ($($arg:tt)*) => {
        println!(
            "{arrow} {title}{separator}",
            arrow = "▶".bold().purple(),
            title = format!($($arg)*).bold(),
            separator = $crate::display::separator()
        );
    };
}

/// Start a spinner for a long-running step; finalize the line with
/// `.success()` or `.error()` on the returned handle.
#[macro_export]
macro_rules! loading {
    ($($arg:tt)*) => {
        $crate::display::LoadingHandle::new(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! notify_success {
    ($($arg:tt)*) => {
        println!(
            "{check} {message}",
            check = "✔".green().bold(),
            message = format!($($arg)*)
        );
    };
}

/// Ask the user to confirm; bails out of the surrounding command with
/// `Ok(())` when the answer is anything but yes.
#[macro_export]
macro_rules! confirm {
    ($($arg:tt)*) => {
        if !$crate::display::confirm_prompt(&format!($($arg)*)) {
            println!("\nAborting...");
            return Ok(());
        }
    };
}
