//! Line-based input: one typed line stands in for one click.

use storefront_cart::CartCommand;
use storefront_core::{DomainError, DomainResult, ProductId};

pub const HELP: &str = "\
commands:
  add <id>      add a product marked [Add to Cart]
  remove <id>   remove a product marked * / [Remove from Cart] (all its cart lines)
  cart          show or hide the shopping cart
  show          redraw the page
  help          this text
  quit          leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(CartCommand),
    /// Redraw without changing anything.
    Render,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_input(line: &str) -> DomainResult<Option<Input>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "add" => Input::Command(CartCommand::AddToCart(product_arg(verb, words.next())?)),
        "remove" | "rm" => {
            Input::Command(CartCommand::RemoveFromCart(product_arg(verb, words.next())?))
        }
        "cart" | "toggle" => Input::Command(CartCommand::ToggleCartVisibility),
        "show" | "view" => Input::Render,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(DomainError::validation(format!("unknown command `{other}`"))),
    };

    if let Some(extra) = words.next() {
        return Err(DomainError::validation(format!(
            "unexpected argument `{extra}` after `{verb}`"
        )));
    }

    Ok(Some(input))
}

fn product_arg(verb: &str, arg: Option<&str>) -> DomainResult<ProductId> {
    arg.ok_or_else(|| DomainError::validation(format!("`{verb}` needs a product id")))?
        .parse()
}
