use super::{indent, Binding, Block, Syntax, Value};

pub struct Python;

impl Syntax for Python {
    fn comment(&self, out: &mut String, level: usize, text: &str) {
        out.push_str(&format!("{}# {}\n", indent(level), text));
    }

    fn binding(&self, out: &mut String, level: usize, binding: &Binding) {
        let pad = indent(level);
        let item_pad = indent(level + 1);
        let annotation = match &binding.annotation {
            Some(text) => format!("  # {}", text),
            None => String::new(),
        };

        match &binding.value {
            Value::Str(s) => {
                out.push_str(&format!("{}{} = \"{}\"{}\n", pad, binding.name, s, annotation));
            }
            Value::List(items) => {
                out.push_str(&format!("{}{} = [{}\n", pad, binding.name, annotation));
                for item in items {
                    out.push_str(&format!("{}{},\n", item_pad, item));
                }
                out.push_str(&format!("{}]\n", pad));
            }
            Value::Map(pairs) => {
                out.push_str(&format!("{}{} = {{{}\n", pad, binding.name, annotation));
                for (key, value) in pairs {
                    out.push_str(&format!("{}{}: \"{}\",\n", item_pad, key, value));
                }
                out.push_str(&format!("{}}}\n", pad));
            }
        }
    }

    fn open_block(&self, out: &mut String, name: &str) {
        out.push_str(&format!("class {}:\n", name));
    }

    fn close_block(&self, out: &mut String, block: &Block) {
        // A class needs at least one statement
        if block.is_empty() {
            out.push_str(&format!("{}pass\n", indent(1)));
        }
    }
}
