use gift_core::{Action, Notice};
use gift_domain::{GiftId, Page};

use super::navigation::open_page;
use super::parse_gift_id;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::views::EMPTY_CART;

const CART_USAGE: &str = "cart [list | add <id> | remove <id>]";
const WISHLIST_USAGE: &str = "wishlist [list | add <id> | remove <id>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("cart", "Show or change your cart", CART_USAGE, cmd_cart).signed_in(),
        CommandEntry::new(
            "wishlist",
            "Show or change your wishlist",
            WISHLIST_USAGE,
            cmd_wishlist,
        )
        .signed_in(),
        CommandEntry::new("checkout", "Pay for the cart", "checkout", cmd_checkout).signed_in(),
    ]
}

#[derive(Clone, Copy)]
enum ListKind {
    Cart,
    Wishlist,
}

impl ListKind {
    fn page(self) -> Page {
        match self {
            ListKind::Cart => Page::Cart,
            ListKind::Wishlist => Page::Wishlist,
        }
    }

    fn usage(self) -> &'static str {
        match self {
            ListKind::Cart => CART_USAGE,
            ListKind::Wishlist => WISHLIST_USAGE,
        }
    }

    fn add(self, id: GiftId) -> Action {
        match self {
            ListKind::Cart => Action::AddToCart(id),
            ListKind::Wishlist => Action::AddToWishlist(id),
        }
    }

    fn remove(self, id: GiftId) -> Action {
        match self {
            ListKind::Cart => Action::RemoveFromCart(id),
            ListKind::Wishlist => Action::RemoveFromWishlist(id),
        }
    }
}

fn cmd_cart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_list_command(context, ListKind::Cart, args)
}

fn cmd_wishlist(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run_list_command(context, ListKind::Wishlist, args)
}

fn run_list_command(context: &mut ShellContext, kind: ListKind, args: &[&str]) -> CommandResult {
    let action = args.first().map(|value| value.to_lowercase());
    match action.as_deref() {
        None | Some("list") | Some("show") => open_page(context, kind.page()),
        Some("add") => {
            let raw = context.arg_or_prompt(args, 1, "Gift id", kind.usage())?;
            let id = parse_gift_id(&raw)?;
            if context.apply(kind.add(id))? == Notice::Unchanged {
                cli_io::print_warning(format!("There is no gift {id} in the catalog."));
            }
            Ok(())
        }
        Some("remove") | Some("rm") => {
            let raw = context.arg_or_prompt(args, 1, "Gift id", kind.usage())?;
            let id = parse_gift_id(&raw)?;
            context.apply(kind.remove(id))?;
            if context.session.page == kind.page() {
                context.render_page();
            }
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown action `{other}`. usage: {}",
            kind.usage()
        ))),
    }
}

fn cmd_checkout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.session.cart.is_empty() {
        cli_io::print_warning(EMPTY_CART);
    } else {
        cli_io::print_info("Checkout not implemented yet!");
    }
    Ok(())
}
