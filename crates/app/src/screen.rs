//! Every screen the router can land on.

/// Closed enumeration of screens.
///
/// The screens themselves (forms, lists, charts) are out of scope here; the
/// router only decides *which* one the visitor is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    // Public
    Index,
    Events,
    EventDetail,
    About,
    Contact,
    Privacy,
    Refunds,
    Terms,
    Cookies,

    // Auth
    Login,
    Register,
    ForgotPassword,

    // User
    UserTickets,
    UserProfile,

    // Organizer
    OrganizerDashboard,
    OrganizerEvents,
    OrganizerProfile,
    CreateEvent,
    EditEvent,
    ListTicketCategories,
    CreateTicketCategories,

    // Admin
    AdminDashboard,
    AdminUsers,
    AdminEvents,
    AdminTransactions,

    /// Terminal screen for unmatched paths.
    NotFound,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Index => "index",
            Screen::Events => "events",
            Screen::EventDetail => "event-detail",
            Screen::About => "about",
            Screen::Contact => "contact",
            Screen::Privacy => "privacy",
            Screen::Refunds => "refunds",
            Screen::Terms => "terms",
            Screen::Cookies => "cookies",
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::ForgotPassword => "forgot-password",
            Screen::UserTickets => "user-tickets",
            Screen::UserProfile => "user-profile",
            Screen::OrganizerDashboard => "organizer-dashboard",
            Screen::OrganizerEvents => "organizer-events",
            Screen::OrganizerProfile => "organizer-profile",
            Screen::CreateEvent => "create-event",
            Screen::EditEvent => "edit-event",
            Screen::ListTicketCategories => "ticket-categories",
            Screen::CreateTicketCategories => "create-ticket-categories",
            Screen::AdminDashboard => "admin-dashboard",
            Screen::AdminUsers => "admin-users",
            Screen::AdminEvents => "admin-events",
            Screen::AdminTransactions => "admin-transactions",
            Screen::NotFound => "not-found",
        }
    }
}

impl core::fmt::Display for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
