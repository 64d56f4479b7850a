//! Actions returned by screen event handlers.

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the trip draft, transition between
/// stages, and dispatch network jobs. Guarded transitions (advance, submit)
/// are re-checked by the `App` rather than trusted from the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Re-check sign-in state against the planner service.
    RecheckAuth,
    /// Look up destination candidates for the given freehand text.
    LookupDestination(String),
    /// Advance the form from the details stage to the POI stage.
    AdvanceStage,
    /// Return to the details stage, keeping already-added POIs.
    BackToDetails,
    /// Append the given label to the POI list.
    AddPoi(String),
    /// Remove the POI at the given display position.
    RemovePoi(usize),
    /// Accept the suggestion card at the given position as a POI.
    AcceptSuggestion(usize),
    /// Submit the trip to the planner service.
    Submit,
    /// Close the help screen and return to its origin.
    CloseHelp,
    /// Quit the application.
    Quit,
}
