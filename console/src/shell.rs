//! Line-driven terminal loop
//!
//! Reads one command per line and re-renders the active view after each.
//! While waiting for input it also waits on the view's search debounce, so a
//! search fetch fires even if the user types nothing further.

use std::io::Write;
use std::str::FromStr;

use shared::Language;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::error::{ConsoleError, ConsoleResult, Operation};
use crate::render::{error_panel, render_view};
use crate::routes::Route;
use crate::views::{View, ViewContext};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Search(String),
    Refresh,
    Add,
    Edit(String),
    Set { field: String, value: String },
    Save,
    Cancel,
    Delete(String),
    Orders(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |usage: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("usage: {}", usage))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "go" => Ok(Command::Go(required("go <path>")?)),
            "search" => Ok(Command::Search(rest.to_string())),
            "refresh" => Ok(Command::Refresh),
            "add" => Ok(Command::Add),
            "edit" => Ok(Command::Edit(required("edit <id>")?)),
            "set" => {
                let rest = required("set <field> <value>")?;
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest.as_str(), ""),
                };
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "delete" => Ok(Command::Delete(required("delete <id>")?)),
            "orders" => Ok(Command::Orders(required("orders <customer-id>")?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {} (try `help`)", other)),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    ctx: ViewContext,
    route: Route,
    view: View,
}

impl Shell {
    pub fn new(ctx: ViewContext, route: Route) -> Self {
        let view = route.view(&ctx);
        Self { ctx, route, view }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Replace the active view, cancelling the old one's timers
    pub async fn navigate(&mut self, route: Route) {
        tracing::info!(path = route.path(), "navigate");
        self.view.unmount();
        self.view = route.view(&self.ctx);
        self.route = route;
        self.view.mount().await;
    }

    /// Run until `quit` or end of input
    pub async fn run<I, W>(&mut self, input: I, out: &mut W) -> ConsoleResult<()>
    where
        I: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        self.view.mount().await;
        self.render(out)?;

        loop {
            write!(out, "> ")?;
            out.flush()?;

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if let Flow::Quit = self.execute(&line, &mut lines, out).await? {
                        break;
                    }
                }
                search = self.view.search_due() => {
                    tracing::debug!(%search, "debounced search due");
                    self.view.fetch().await;
                    writeln!(out)?;
                    self.render(out)?;
                }
            }
        }

        self.view.unmount();
        Ok(())
    }

    async fn execute<I, W>(&mut self, line: &str, lines: &mut Lines<I>, out: &mut W) -> ConsoleResult<Flow>
    where
        I: AsyncBufRead + Unpin,
        W: Write,
    {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(usage) => {
                writeln!(out, "{}", usage)?;
                return Ok(Flow::Continue);
            }
        };

        let (operation, result) = match command {
            Command::Go(path) => {
                self.navigate(Route::parse(&path)).await;
                (Operation::Load, Ok(()))
            }
            Command::Search(text) => {
                // The fetch happens when the debounce fires
                let result = self.view.set_search(&text);
                if result.is_ok() {
                    return Ok(Flow::Continue);
                }
                (Operation::Load, result)
            }
            Command::Refresh => {
                self.view.refresh().await;
                (Operation::Load, Ok(()))
            }
            Command::Add => (Operation::Save, self.view.open_create()),
            Command::Edit(id) => (Operation::Save, self.view.open_edit(&id)),
            Command::Set { field, value } => (Operation::Save, self.view.set_field(&field, &value)),
            Command::Save => (Operation::Save, self.view.save().await),
            Command::Cancel => {
                self.view.cancel();
                (Operation::Load, Ok(()))
            }
            Command::Delete(id) => {
                let result = match self.view.delete_prompt(&id) {
                    // Only a known row gets a prompt, so the next line is always its answer
                    Ok(prompt) => {
                        write!(out, "{} (y/N) ", prompt)?;
                        out.flush()?;
                        let answer = lines.next_line().await?.unwrap_or_default();
                        let yes = is_yes(&answer);
                        self.view.delete(&id, &mut |_: &str| yes).await.map(|_| ())
                    }
                    Err(err) => Err(err),
                };
                (Operation::Delete, result)
            }
            Command::Orders(id) => (Operation::Load, self.view.view_orders(&id).await),
            Command::Help => {
                out.write_all(help(self.ctx.language).as_bytes())?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        self.render(out)?;
        if let Err(err) = result {
            match err {
                // Already shown by the view's own error panel or form
                ConsoleError::Http(_)
                | ConsoleError::Status { .. }
                | ConsoleError::Decode { .. }
                | ConsoleError::Form(_) => {}
                ConsoleError::Io(err) => return Err(ConsoleError::Io(err)),
                other => {
                    let message = self.view.explain(&other, operation);
                    out.write_all(error_panel(&message, self.ctx.language).as_bytes())?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn render<W: Write>(&self, out: &mut W) -> ConsoleResult<()> {
        out.write_all(render_view(&self.route, &self.view).as_bytes())?;
        Ok(())
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "c" | "có" | "co"
    )
}

fn help(language: Language) -> String {
    let mut text = String::new();
    let lines: &[(&str, &str, &str)] = &[
        ("go <path>", "chuyển trang", "open a page"),
        ("search <text>", "tìm kiếm (để trống để xóa)", "filter the list (empty clears)"),
        ("refresh", "tải lại ngay", "reload now"),
        ("add", "mở biểu mẫu thêm mới", "open an empty form"),
        ("edit <id>", "sửa bản ghi", "edit a record"),
        ("set <field> <value>", "nhập giá trị cho trường", "fill in a form field"),
        ("save", "lưu biểu mẫu", "submit the form"),
        ("cancel", "đóng biểu mẫu / thông báo lỗi", "close the form or error"),
        ("delete <id>", "xóa bản ghi", "delete a record"),
        ("orders <customer-id>", "xem đơn hàng của khách", "show a customer's orders"),
        ("help", "hiển thị trợ giúp", "show this help"),
        ("quit", "thoát", "exit"),
    ];
    for (usage, vi, en) in lines {
        let description = match language {
            Language::Vietnamese => vi,
            Language::English => en,
        };
        text.push_str(&format!("  {:<22} {}\n", usage, description));
    }
    text.push('\n');
    for route in Route::MENU.iter() {
        text.push_str(&format!("  {:<22} {}\n", route.path(), route.title(language)));
    }
    text
}
