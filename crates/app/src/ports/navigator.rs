//! Navigator port — client-side route changes.

use std::rc::Rc;

use faqhub_domain::route::Route;

/// Moves the user to another route. Navigation has no observable result.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route);
    }
}
