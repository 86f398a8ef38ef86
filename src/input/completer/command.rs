use rustyline::completion::Pair;

/// Completes the first word against the built-in command names.
#[derive(Debug, Clone)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(commands: impl IntoIterator<Item = &'static str>) -> Self {
        let mut commands: Vec<&'static str> = commands.into_iter().collect();
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.commands.iter().any(|cmd| *cmd == name)
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
