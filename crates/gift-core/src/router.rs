//! Page transitions.
//!
//! The router moves the session between pages on request and never checks
//! whether the target needs a signed-in user. Views only offer the links in
//! [`Router::links`], which is how protected pages stay out of reach.

use gift_domain::Page;

use crate::Session;

const NAVBAR: [Page; 4] = [Page::Home, Page::Cart, Page::Wishlist, Page::Profile];

pub struct Router;

impl Router {
    /// Switches to `target` and returns the page that was showing.
    pub fn navigate(session: &mut Session, target: Page) -> Page {
        let previous = session.page;
        session.page = target;
        tracing::debug!(session = %session.id, from = %previous, to = %target, "navigated");
        previous
    }

    /// Targets a view offers from `page`: the navbar when signed in, plus the
    /// cross links between the login and register forms.
    pub fn links(page: Page, logged_in: bool) -> Vec<Page> {
        let mut links = Vec::new();
        match page {
            Page::Login => links.push(Page::Register),
            Page::Register => links.push(Page::Login),
            _ => {}
        }
        if logged_in {
            links.extend(NAVBAR);
        }
        links
    }

    pub fn can_follow(page: Page, logged_in: bool, target: Page) -> bool {
        Self::links(page, logged_in).contains(&target)
    }
}
