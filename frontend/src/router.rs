//! Routes, the role guard and the navigation callback handed to pages.

use yew::Callback;

use crate::models::{Session, UserType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    /// Location hash without the leading `#`.
    pub fn hash(self) -> &'static str {
        match self {
            Route::Login => "",
            Route::Bills => "employee/bills",
            Route::NewBill => "employee/bill/new",
            Route::Dashboard => "admin/dashboard",
        }
    }

    pub fn path(self) -> String {
        match self {
            Route::Login => "/".to_string(),
            other => format!("#{}", other.hash()),
        }
    }

    /// Unknown paths fall back to the login route.
    pub fn from_path(path: &str) -> Self {
        match path.trim_start_matches('#').trim_matches('/') {
            "employee/bills" => Route::Bills,
            "employee/bill/new" => Route::NewBill,
            "admin/dashboard" => Route::Dashboard,
            _ => Route::Login,
        }
    }
}

/// What actually gets rendered once the session has been checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    Login,
    Bills(&'a Session),
    NewBill(&'a Session),
    Dashboard(&'a Session),
}

pub fn guard(route: Route, session: Option<&Session>) -> Screen<'_> {
    let Some(session) = session else {
        return Screen::Login;
    };

    match (session.user_type, route) {
        (UserType::Admin, _) => Screen::Dashboard(session),
        (UserType::Employee, Route::NewBill) => Screen::NewBill(session),
        (UserType::Employee, Route::Bills | Route::Login | Route::Dashboard) => {
            Screen::Bills(session)
        }
    }
}

/// A navigation request. `error` is shown by the target page instead of its
/// regular content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub error: Option<String>,
}

impl Navigation {
    pub fn to(route: Route) -> Self {
        Self { route, error: None }
    }
}

#[derive(Clone, PartialEq)]
pub struct Navigator {
    on_navigate: Callback<Navigation>,
}

impl Navigator {
    pub fn new(on_navigate: Callback<Navigation>) -> Self {
        Self { on_navigate }
    }

    pub fn navigate(&self, route: Route) {
        log::info!("navigating to {}", route.path());
        self.on_navigate.emit(Navigation::to(route));
    }

    pub fn navigate_with_error(&self, route: Route, message: impl Into<String>) {
        let message = message.into();
        log::info!("navigating to {} with error {message:?}", route.path());
        self.on_navigate.emit(Navigation {
            route,
            error: Some(message),
        });
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Navigator that records every request it receives.
    pub fn recording_navigator() -> (Navigator, Rc<RefCell<Vec<Navigation>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let navigator = Navigator::new(Callback::from(move |nav: Navigation| {
            sink.borrow_mut().push(nav);
        }));
        (navigator, log)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::recording_navigator;
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/");
        assert_eq!(Route::Bills.path(), "#employee/bills");
        assert_eq!(Route::NewBill.path(), "#employee/bill/new");
        assert_eq!(Route::Dashboard.path(), "#admin/dashboard");
    }

    #[test]
    fn test_routes_parse_back_from_paths() {
        for route in [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
        assert_eq!(Route::from_path("employee/bills"), Route::Bills);
        assert_eq!(Route::from_path("#unknown"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
    }

    #[test]
    fn test_guard_without_session_shows_login() {
        assert_eq!(guard(Route::Bills, None), Screen::Login);
        assert_eq!(guard(Route::NewBill, None), Screen::Login);
    }

    #[test]
    fn test_guard_employee_routes() {
        let session = Session::employee("employee@test.tld");
        assert_eq!(guard(Route::Bills, Some(&session)), Screen::Bills(&session));
        assert_eq!(guard(Route::NewBill, Some(&session)), Screen::NewBill(&session));
        assert_eq!(guard(Route::Login, Some(&session)), Screen::Bills(&session));
        assert_eq!(guard(Route::Dashboard, Some(&session)), Screen::Bills(&session));
    }

    #[test]
    fn test_guard_admin_lands_on_dashboard() {
        let session = Session {
            user_type: UserType::Admin,
            email: "admin@test.tld".to_string(),
        };
        assert_eq!(guard(Route::NewBill, Some(&session)), Screen::Dashboard(&session));
        assert_eq!(guard(Route::Bills, Some(&session)), Screen::Dashboard(&session));
    }

    #[test]
    fn test_navigator_emits_once_per_call() {
        let (navigator, log) = recording_navigator();
        navigator.navigate(Route::NewBill);
        navigator.navigate_with_error(Route::Bills, "Erreur 500");

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], Navigation::to(Route::NewBill));
        assert_eq!(log[1].route, Route::Bills);
        assert_eq!(log[1].error.as_deref(), Some("Erreur 500"));
    }
}
