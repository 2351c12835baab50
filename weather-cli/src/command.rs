/// What one line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ChangeAlarms,
    Lookup(Vec<String>),
}

impl Command {
    /// Interpret a raw input line. Empty input looks up `defaults`.
    pub fn parse(input: &str, defaults: &[String]) -> Self {
        let input = input.trim();

        if input.is_empty() {
            return Command::Lookup(defaults.to_vec());
        }
        if input.eq_ignore_ascii_case("q") {
            return Command::Quit;
        }
        if input.eq_ignore_ascii_case("c") {
            return Command::ChangeAlarms;
        }

        let codes = if input.contains(',') {
            input
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(String::from)
                .collect()
        } else {
            input.split_whitespace().map(String::from).collect()
        };

        Command::Lookup(codes)
    }
}
