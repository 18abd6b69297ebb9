//! Interactive line-based session.
//!
//! Each input line is one user action; the workbench is updated and the
//! result printed before the next line is read.

use std::io::{BufRead, Write};
use std::path::Path;

use aanya_core::{Clock, ItemId};
use aanya_inventory::{CategoryFilter, ItemForm, Notice, Size, StockFilter, Workbench};

use crate::deliver_export;
use crate::render;

const HELP: &str = "\
commands:
  list                         show items matching the current filters
  summary                      show stock counters
  categories                   list categories in the store
  search [text]                filter by name or color (no text clears)
  category <name|all>          show one category tab
  filter <all|good|low|out>    filter by stock level
  add key=value ...            add an item (name, category, price, color, m, l, xl, xxl, xxxl)
  edit <id> key=value ...      change fields of an item
  delete <id>                  stage an item for deletion
  confirm | cancel             finish a staged deletion
  export [dir]                 write CSV to dir (or print it)
  help | quit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<C: Clock> {
    workbench: Workbench<C>,
}

impl<C: Clock> Shell<C> {
    pub fn new(workbench: Workbench<C>) -> Self {
        Self { workbench }
    }

    pub fn workbench(&self) -> &Workbench<C> {
        &self.workbench
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "Type `help` for commands.")?;
        render::write_summary(out, &self.workbench.summary())?;
        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        let tokens = tokenize(line);
        let Some((command, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "list" => render::write_items(out, &self.workbench.visible_items())?,
            "summary" => render::write_summary(out, &self.workbench.summary())?,
            "categories" => writeln!(out, "{}", self.workbench.categories().join(", "))?,
            "search" => {
                self.workbench.set_search(args.join(" "));
                render::write_items(out, &self.workbench.visible_items())?;
            }
            "category" => {
                let name = args.join(" ");
                let name = if name.is_empty() { "all".to_string() } else { name };
                self.workbench.set_category(CategoryFilter::from(name.as_str()));
                render::write_items(out, &self.workbench.visible_items())?;
            }
            "filter" => match args.first().map(|s| s.parse::<StockFilter>()) {
                Some(Ok(filter)) => {
                    self.workbench.set_stock_filter(filter);
                    render::write_items(out, &self.workbench.visible_items())?;
                }
                _ => writeln!(out, "usage: filter <all|good|low|out>")?,
            },
            "add" => {
                let mut form = self.workbench.open_add();
                self.fill_and_submit(&mut form, args, out)?;
            }
            "edit" => match args.split_first().map(|(id, rest)| (id.parse::<ItemId>(), rest)) {
                Some((Ok(id), fields)) => match self.workbench.open_edit(id) {
                    Some(mut form) => self.fill_and_submit(&mut form, fields, out)?,
                    None => writeln!(out, "no item with id {id}")?,
                },
                _ => writeln!(out, "usage: edit <id> key=value ...")?,
            },
            "delete" => match args.first().map(|s| s.parse::<ItemId>()) {
                Some(Ok(id)) => match self.workbench.inventory().find_by_id(id) {
                    Some(item) => {
                        writeln!(
                            out,
                            "Delete \"{}\"? Type `confirm` to delete or `cancel` to keep it.",
                            item.name()
                        )?;
                        self.workbench.request_delete(id);
                    }
                    None => writeln!(out, "no item with id {id}")?,
                },
                _ => writeln!(out, "usage: delete <id>")?,
            },
            "confirm" => match self.workbench.confirm_delete() {
                Some(notice) => render::write_notice(out, &notice)?,
                None => writeln!(out, "nothing to delete")?,
            },
            "cancel" => self.workbench.cancel_delete(),
            "export" => self.export(args.first().map(String::as_str), out)?,
            other => writeln!(out, "unknown command `{other}`; type `help`")?,
        }

        Ok(Flow::Continue)
    }

    fn fill_and_submit(
        &mut self,
        form: &mut ItemForm,
        fields: &[String],
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        if let Err(message) = apply_fields(form, fields) {
            self.workbench.close_editor();
            writeln!(out, "{message}")?;
            return Ok(());
        }
        let notice = self.workbench.submit(form);
        if notice.is_error() {
            self.workbench.close_editor();
        }
        render::write_notice(out, &notice)?;
        Ok(())
    }

    fn export(&mut self, dir: Option<&str>, out: &mut impl Write) -> anyhow::Result<()> {
        let export = match self.workbench.export() {
            Ok(export) => export,
            Err(e) => {
                let failed: Result<usize, _> = Err(e);
                return Ok(render::write_notice(out, &Notice::from_export(&failed))?);
            }
        };

        match dir {
            Some(dir) => {
                let outcome = deliver_export(&export, Path::new(dir));
                if let Ok(path) = &outcome {
                    writeln!(out, "wrote {}", path.display())?;
                }
                let notice = Notice::from_export(&outcome.map(|_| export.rows));
                render::write_notice(out, &notice)?;
            }
            None => writeln!(out, "{}", export.content)?,
        }
        Ok(())
    }
}

/// Apply `key=value` pairs to a form.
pub fn apply_fields(form: &mut ItemForm, fields: &[String]) -> Result<(), String> {
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got `{field}`"))?;
        match key.to_ascii_lowercase().as_str() {
            "name" => form.name = value.to_string(),
            "category" => form.category = value.to_string(),
            "price" => form.price = value.to_string(),
            "color" => form.color = value.to_string(),
            other => match other.parse::<Size>() {
                Ok(size) => form.set_stock(size, value),
                Err(_) => return Err(format!("unknown field `{key}`")),
            },
        }
    }
    Ok(())
}

/// Split a line on whitespace, keeping double-quoted runs together.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}
