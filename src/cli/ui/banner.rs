use gift_core::Session;

use crate::cli::output::current_preferences;

pub struct Banner;

impl Banner {
    /// Prompt text for the line editor, e.g. `home · cart(2) ⮞ `.
    pub fn text(session: &Session) -> String {
        Self::compose(session, current_preferences().plain_mode)
    }

    fn compose(session: &Session, plain: bool) -> String {
        let (separator, arrow) = if plain { ("|", ">") } else { ("·", "⮞") };
        let page = session.page.token();
        if session.is_logged_in() {
            format!("{page} {separator} cart({}) {arrow} ", session.cart.len())
        } else {
            format!("{page} {arrow} ")
        }
    }
}
