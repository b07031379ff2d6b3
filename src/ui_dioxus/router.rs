use dioxus::prelude::*;

use crate::ui_dioxus::components::Shell;
use crate::ui_dioxus::views::*;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},

        #[route("/tasks", TasksView)]
        Tasks {},

        #[route("/projects/:project_id")]
        ProjectDetails { project_id: String },

        #[route("/team", TeamView)]
        Team {},

        #[route("/reports", ReportsView)]
        Reports {},

        #[route("/calendar", CalendarView)]
        Calendar {},

        #[route("/auth", AuthView)]
        Auth {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
