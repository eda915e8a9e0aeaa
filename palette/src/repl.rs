use crate::editor::{EditorState, EditorStatus, ThemeEditor};
use anyhow::Context;
use glaze::ThemePath;
use std::fs;
use std::path::Path;
use tokio::runtime::Runtime;

pub fn ok(msg: &str) {
    println!("\x1b[32m✓\x1b[0m {msg}");
}

pub fn warn(msg: &str) {
    println!("\x1b[33m⚠\x1b[0m {msg}");
}

fn prompt(editor: &ThemeEditor) -> String {
    let state = match editor.status().state {
        EditorState::Uninitialized => "no css".to_string(),
        EditorState::Rendering { generation } => format!("rendering #{generation}"),
        EditorState::Rendered { generation } => format!("#{generation}"),
    };
    format!("\x1b[1;34mpalette\x1b[0m(\x1b[1;32m{state}\x1b[0m)> ")
}

fn repl_help() {
    println!(
        "\
Commands:
  fields                List editable fields with their current values
  get <path>            Show one field, e.g. `get colors.primary.50`
  set <path> <value>    Write a value and re-render
  pick <path> <value>   Stage a value without rendering
  commit <path>         Write the staged value and re-render
  status                Show the render status
  write [file]          Write the preview page

  help                  Show this help
  exit | quit           Leave REPL
"
    );
}

pub fn print_fields(editor: &ThemeEditor) {
    for field in editor.form().fields() {
        let value = field.display(editor.theme()).unwrap_or_default();
        let draft = field
            .draft()
            .map(|draft| format!(" (staged: {draft})"))
            .unwrap_or_default();
        println!(
            "  {:<28} {:<10} [{}]{draft}",
            field.path().to_string(),
            value,
            field.kind().label()
        );
    }
}

pub fn report_status(status: &EditorStatus) {
    match (&status.last_error, status.applied) {
        (Some(error), _) => warn(&format!("render failed, previous stylesheet kept: {error}")),
        (None, Some(generation)) => ok(&format!("stylesheet #{generation} applied")),
        (None, None) => warn("no stylesheet applied yet"),
    }
}

pub fn write_page(editor: &ThemeEditor, path: &Path) -> anyhow::Result<()> {
    fs::write(path, editor.document().to_html())
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn parse_path(args: &[&str]) -> anyhow::Result<ThemePath> {
    let raw = args.get(1).context("missing field path")?;
    Ok(raw.parse()?)
}

fn handle_repl_command(
    input: &str,
    editor: &mut ThemeEditor,
    runtime: &Runtime,
    output: &Path,
) -> anyhow::Result<bool> {
    let args = input.split_whitespace().collect::<Vec<_>>();
    if args.is_empty() {
        return Ok(false);
    }

    match args[0] {
        "help" | "h" => {
            repl_help();
        }

        "exit" | "quit" | "q" => {
            return Ok(true);
        }

        "fields" | "f" => {
            print_fields(editor);
        }

        "get" | "g" => {
            let path = parse_path(&args)?;
            let value = editor
                .display(&path)
                .with_context(|| format!("no field at `{path}`"))?;
            println!("{path} = {value}");
        }

        "set" | "s" => {
            let path = parse_path(&args)?;
            let raw = args.get(2).context("missing value")?;
            let written = editor.set(&path, raw)?;
            ok(&format!("{path} = {written}"));
            report_status(&runtime.block_on(editor.wait_settled()));
        }

        "pick" | "p" => {
            let path = parse_path(&args)?;
            let raw = args.get(2).context("missing value")?;
            editor.stage(&path, raw)?;
            ok(&format!("staged {raw} for {path}; `commit {path}` to apply"));
        }

        "commit" | "c" => {
            let path = parse_path(&args)?;
            let written = editor.commit(&path)?;
            ok(&format!("{path} = {written}"));
            report_status(&runtime.block_on(editor.wait_settled()));
        }

        "status" => {
            let status = editor.status();
            println!(
                "{:?} (issued #{}, settled #{})",
                status.state, status.issued, status.settled
            );
            report_status(&status);
        }

        "write" | "w" => {
            let path = args.get(1).map(Path::new).unwrap_or(output);
            write_page(editor, path)?;
            ok(&format!("wrote {}", path.display()));
        }

        _ => {
            warn("unknown command, type `help`");
        }
    }

    Ok(false)
}

pub fn repl(editor: &mut ThemeEditor, runtime: &Runtime, output: &Path) -> anyhow::Result<()> {
    use rustyline::{DefaultEditor, error::ReadlineError};

    let mut rl = DefaultEditor::new()?;
    report_status(&runtime.block_on(editor.wait_settled()));

    loop {
        let prompt = prompt(editor);
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                match handle_repl_command(line, editor, runtime, output) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => warn(&e.to_string()),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
