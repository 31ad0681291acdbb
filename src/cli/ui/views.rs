//! Text renderings of the six storefront pages.
//!
//! Every view is built as a list of lines first so it can be checked without
//! capturing stdout; [`render`] prints them.

use gift_config::Config;
use gift_core::{ListService, Router, Session};
use gift_domain::{Gift, Page};

use crate::cli::ui::formatting::Formatter;

pub const EMPTY_LISTING: &str = "No gifts match your criteria.";
pub const EMPTY_CART: &str = "Your cart is empty!";
pub const EMPTY_WISHLIST: &str = "Your wishlist is empty!";
pub const NO_USER: &str = "No user is signed in.";

pub fn render(session: &Session, config: &Config) {
    for line in page_lines(session, config, &Formatter::new()) {
        println!("{line}");
    }
}

pub fn page_lines(session: &Session, config: &Config, formatter: &Formatter) -> Vec<String> {
    let mut lines = navbar_lines(session, formatter);
    match session.page {
        Page::Login => lines.extend(login_lines(formatter)),
        Page::Register => lines.extend(register_lines(formatter)),
        Page::Home => lines.extend(home_lines(session, config, formatter)),
        Page::Cart => lines.extend(collection_lines(
            formatter.with_icon("🛒", "Your Cart"),
            EMPTY_CART,
            &session.cart,
            config,
            formatter,
        )),
        Page::Wishlist => lines.extend(collection_lines(
            formatter.with_icon("💖", "Your Wishlist"),
            EMPTY_WISHLIST,
            &session.wishlist,
            config,
            formatter,
        )),
        Page::Profile => lines.extend(profile_lines(session, formatter)),
    }
    lines
}

/// Greeting plus the links a signed-in user can follow. Empty for guests.
pub fn navbar_lines(session: &Session, formatter: &Formatter) -> Vec<String> {
    let Some(display_name) = session.display_name() else {
        return Vec::new();
    };

    let links: Vec<String> = Router::links(session.page, true)
        .into_iter()
        .filter(|page| page.is_protected())
        .map(|page| match page {
            Page::Cart => format!("cart ({})", session.cart.len()),
            other => other.token().to_string(),
        })
        .chain(std::iter::once("logout".to_string()))
        .collect();

    vec![
        formatter.accent_text(formatter.with_icon_after(format!("Welcome, {display_name}"), "🌟")),
        formatter.muted_text(links.join(" | ")),
    ]
}

fn login_lines(formatter: &Formatter) -> Vec<String> {
    vec![
        formatter.header_text("Login"),
        formatter.detail_text("Sign in with `login <username> <password>`, or just `login` to be prompted."),
        formatter.muted_text("Don't have an account? `nav register`"),
    ]
}

fn register_lines(formatter: &Formatter) -> Vec<String> {
    vec![
        formatter.header_text("Register"),
        formatter.detail_text(
            "Create an account with `register <username> <password> [display name]`.",
        ),
        formatter.muted_text("Already registered? `nav login`"),
    ]
}

fn home_lines(session: &Session, config: &Config, formatter: &Formatter) -> Vec<String> {
    let mut lines = vec![
        formatter.header_text(formatter.with_icon_after("Gift Galaxy", "🎁")),
        formatter.detail_text("Find the perfect gift for your loved ones!"),
        formatter.muted_text(filter_summary(session, config)),
    ];
    let visible = session.visible_gifts();
    if !session.catalog_query().is_unfiltered(config.price_ceiling) && !visible.is_empty() {
        lines.push(formatter.muted_text(format!(
            "{} of {} gifts match.",
            visible.len(),
            session.catalog.len()
        )));
    }
    lines.extend(listing_lines(&visible, &session.cart, config, formatter));
    lines
}

/// One line describing the active search, sort, price and category filters.
pub fn filter_summary(session: &Session, config: &Config) -> String {
    let search = if session.search_query.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", session.search_query)
    };
    let categories = if session.filter_category.is_empty() {
        "All".to_string()
    } else {
        session
            .filter_category
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Search: {search} | Sort: {} | Max price: {} | Categories: {categories}",
        session.sort_by,
        config.format_price(session.filter_price)
    )
}

/// Two lines per gift; gifts already in `cart` are tagged with their count.
pub fn listing_lines(
    gifts: &[Gift],
    cart: &[Gift],
    config: &Config,
    formatter: &Formatter,
) -> Vec<String> {
    if gifts.is_empty() {
        return vec![formatter.detail_text(EMPTY_LISTING)];
    }
    gifts
        .iter()
        .flat_map(|gift| {
            let in_cart = match ListService::count(cart, gift.id) {
                0 => String::new(),
                count => format!(" [in cart: {count}]"),
            };
            [
                format!(
                    "  {:>4}  {} - {}{in_cart}",
                    gift.id.to_string(),
                    formatter.accent_text(&gift.name),
                    config.format_price(gift.price)
                ),
                formatter.muted_text(format!(
                    "        {} · {}",
                    gift.category, gift.description
                )),
            ]
        })
        .collect()
}

fn collection_lines(
    title: String,
    empty_message: &str,
    items: &[Gift],
    config: &Config,
    formatter: &Formatter,
) -> Vec<String> {
    let mut lines = vec![formatter.header_text(title)];
    if items.is_empty() {
        lines.push(formatter.detail_text(empty_message));
        return lines;
    }

    lines.extend(items.iter().enumerate().map(|(index, gift)| {
        format!(
            "  {}. {} {} - {}",
            index + 1,
            gift.id,
            gift.name,
            config.format_price(gift.price)
        )
    }));
    lines.push(formatter.accent_text(format!(
        "Total: {} ({} item{})",
        config.format_price(ListService::total(items)),
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    )));
    lines
}

fn profile_lines(session: &Session, formatter: &Formatter) -> Vec<String> {
    let mut lines = vec![formatter.header_text(formatter.with_icon("👤", "Your Profile"))];
    match session.current_user() {
        Some(user) => {
            lines.extend(formatter.two_column_lines(&[
                ("Username", user.username.as_str()),
                ("Display name", user.display_name.as_str()),
            ]));
            lines.push(formatter.muted_text(
                "Update with `profile save <display name> [new password]`.",
            ));
        }
        None => lines.push(formatter.detail_text(NO_USER)),
    }
    lines
}
