use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct ArgsBuilder {
    flags: Vec<String>,
    single_args: Vec<String>,
}

impl ArgsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn flag(mut self, name: &str) -> Self {
        self.flags.push(name.into());
        self
    }

    pub(crate) fn arg(mut self, name: &str) -> Self {
        self.single_args.push(name.into());
        self
    }

    pub(crate) fn build(self, args: &[String]) -> Args {
        let mut map: HashMap<String, ArgValue> = HashMap::new();
        let mut args = args.to_vec();
        let Self { flags, single_args } = self;

        for flag in flags {
            if let Some(pos) = args.iter().position(|v| v.as_str() == flag.as_str()) {
                args.remove(pos);
                map.insert(flag, ArgValue::Bool(true));
            }
        }

        for single_arg in single_args {
            if let Some(pos) = args.iter().position(|v| v.as_str() == single_arg.as_str()) {
                args.remove(pos);
                let value = if args.get(pos).is_some_and(|v| !v.starts_with("--")) {
                    ArgValue::String(args.remove(pos))
                } else {
                    ArgValue::Missing
                };
                map.insert(single_arg, value);
            }
        }

        Args { map, rest: args }
    }
}

#[derive(Debug)]
enum ArgValue {
    Bool(bool),
    String(String),
    Missing,
}

#[derive(Debug)]
pub(crate) struct Args {
    map: HashMap<String, ArgValue>,
    rest: Vec<String>,
}

impl Args {
    pub(crate) fn flag(&self, key: &str) -> bool {
        match self.map.get(key) {
            Some(ArgValue::Bool(v)) => *v,
            _ => false,
        }
    }

    pub(crate) fn value(&self, key: &str) -> Option<String> {
        match self.map.get(key) {
            Some(ArgValue::String(v)) => Some(v.into()),
            _ => None,
        }
    }

    /// Single-value args given without their value.
    pub(crate) fn missing_values(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .map
            .iter()
            .filter(|(_, v)| matches!(v, ArgValue::Missing))
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort();
        keys
    }

    /// Whatever no flag or arg claimed.
    pub(crate) fn unknown(&self) -> &[String] {
        &self.rest
    }
}
