// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::arg::Arg;
use crate::args::Args;

const USAGE_PREFIX_SPACES: &str = "    ";

fn positional_usage(arg: &Arg) -> String {
    let name = arg.names.first().map_or("", |n| n.as_str());

    if arg.required {
        format!(" <{}>", name)
    } else {
        format!(" [<{}>]", name)
    }
}

/// Generate a help statement for the registered arguments.
///
/// Options are listed in registration order; positional arguments are
/// listed in position order with the last position at the end.
pub(crate) fn render(name: &str, description: &str, args: &Args) -> String {
    let mut lines = Vec::<String>::new();

    let line = format!("NAME:\n{}{}\n", USAGE_PREFIX_SPACES, name);
    lines.push(line);

    if !description.is_empty() {
        let line = format!(
            "DESCRIPTION:\n{}{}\n",
            USAGE_PREFIX_SPACES,
            description.trim()
        );
        lines.push(line);
    }

    let (mut positionals, options): (Vec<&Arg>, Vec<&Arg>) = args
        .iter()
        .map(|(_, arg, _)| arg)
        .partition(|arg| arg.position.is_positional());

    positionals.sort_by_key(|arg| arg.position);

    //------------------------------------------------------------

    lines.push("USAGE:".into());

    let opts = if options.is_empty() { "" } else { " [OPTIONS]" };

    let posn_args: String = positionals.iter().map(|a| positional_usage(a)).collect();

    let line = format!("{}{}{}{}\n", USAGE_PREFIX_SPACES, name, opts, posn_args);
    lines.push(line);

    //------------------------------------------------------------

    if !options.is_empty() {
        lines.push("OPTIONS:".into());

        for arg in options {
            let line = format!("{}{}", USAGE_PREFIX_SPACES, arg);
            lines.push(line);
        }
    }

    //------------------------------------------------------------

    if !positionals.is_empty() {
        lines.push("\nPOSITIONAL ARGUMENTS:".into());

        for arg in positionals {
            let line = format!("{}{}", USAGE_PREFIX_SPACES, arg);
            lines.push(line);
        }
    }

    // Join all the lines together, remove white space at either end and
    // finally append a single newline.
    let mut final_lines = lines.join("\n").trim().to_string();
    final_lines.push('\n');

    final_lines
}
