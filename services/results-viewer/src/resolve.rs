//! Request-state resolution.
//!
//! Turns raw query parameters into a [`RequestState`] in which every field is
//! valid for the chosen mode. Unknown or missing values fall back to defaults;
//! resolution never fails.

use gp_common::{parse_flag, pick_or_first, CatalogSource, ClosedChoice, QueryArgs, NS_KERNEL};

/// Raw query parameters of `GET /`.
#[derive(Debug, Clone, Default)]
pub struct IndexParams {
    pub mode: Option<String>,
    pub date: Option<String>,
    pub var: Option<String>,
    pub kernel: Option<String>,
    pub view_type: Option<String>,
    pub compare_type: Option<String>,
    pub uncert: Option<String>,
}

impl IndexParams {
    pub fn from_args(args: &QueryArgs) -> Self {
        let field = |key: &str| args.get(key).map(str::to_string);
        Self {
            mode: field("mode"),
            date: field("date"),
            var: field("var"),
            kernel: field("kernel"),
            view_type: field("view_type"),
            compare_type: field("compare_type"),
            uncert: field("uncert"),
        }
    }
}

/// Top-level tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    View,
    Compare,
}

impl ClosedChoice for Mode {
    const VARIANTS: &'static [Self] = &[Mode::View, Mode::Compare];

    fn as_str(&self) -> &'static str {
        match self {
            Mode::View => "View",
            Mode::Compare => "Compare",
        }
    }
}

/// Which model family the View tab shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewType {
    #[default]
    Stationary,
    NonStationary,
}

impl ClosedChoice for ViewType {
    const VARIANTS: &'static [Self] = &[ViewType::Stationary, ViewType::NonStationary];

    fn as_str(&self) -> &'static str {
        match self {
            ViewType::Stationary => "Stationary",
            ViewType::NonStationary => "Non-Stationary",
        }
    }
}

/// Whether Compare shows one kernel against `ns` or every kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareType {
    #[default]
    Single,
    All,
}

impl ClosedChoice for CompareType {
    const VARIANTS: &'static [Self] = &[CompareType::Single, CompareType::All];

    fn as_str(&self) -> &'static str {
        match self {
            CompareType::Single => "single",
            CompareType::All => "all",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CompareType::Single => "Kernel vs. Non-Stationary",
            CompareType::All => "All kernels",
        }
    }
}

/// Options offered by each selector for the current date / variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    pub dates: Vec<String>,
    pub variables: Vec<String>,
    pub kernels: Vec<String>,
}

/// Fully resolved selection for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestState {
    pub mode: Mode,
    pub date: String,
    pub variable: String,
    /// Single kernel in effect; `ns` when View shows the non-stationary model.
    pub kernel: String,
    pub view_type: ViewType,
    pub compare_type: CompareType,
    /// Kernels selected for display, before the `ns` comparison column.
    pub selection: Vec<String>,
    pub show_uncertainty: bool,
}

impl RequestState {
    /// Kernel keys to render as panels, in display order.
    pub fn panels(&self) -> Vec<String> {
        let mut panels = self.selection.clone();
        if self.mode == Mode::Compare && self.compare_type == CompareType::Single {
            panels.push(NS_KERNEL.to_string());
        }
        panels
    }

    /// Whether the kernel dropdown applies to the current mode.
    pub fn kernel_selectable(&self) -> bool {
        match self.mode {
            Mode::View => self.view_type == ViewType::Stationary,
            Mode::Compare => self.compare_type == CompareType::Single,
        }
    }
}

/// Catalog plus resolved state, everything the page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedView {
    pub catalog: OptionCatalog,
    pub state: RequestState,
}

impl ResolvedView {
    /// True when the results root holds no dates at all.
    pub fn is_empty(&self) -> bool {
        self.catalog.dates.is_empty()
    }
}

/// Resolve raw parameters against the catalog.
pub fn resolve_request<C: CatalogSource + ?Sized>(params: &IndexParams, source: &C) -> ResolvedView {
    let mode = Mode::parse_or_default(params.mode.as_deref());
    let view_type = ViewType::parse_or_default(params.view_type.as_deref());
    let compare_type = CompareType::parse_or_default(params.compare_type.as_deref());

    let dates = source.dates();
    let date = pick_or_first(params.date.as_deref(), &dates);

    let variables = source.variables(&date);
    let variable = pick_or_first(params.var.as_deref(), &variables);

    let kernels = source.kernels(&date, &variable);
    let mut kernel = pick_or_first(params.kernel.as_deref(), &kernels);

    // Mode policy runs after kernel validation: `ns` is never a catalog member.
    let selection = match (mode, view_type, compare_type) {
        (Mode::View, ViewType::NonStationary, _) => {
            kernel = NS_KERNEL.to_string();
            vec![kernel.clone()]
        }
        (Mode::Compare, _, CompareType::All) => kernels.clone(),
        _ if kernel.is_empty() => Vec::new(),
        _ => vec![kernel.clone()],
    };

    let state = RequestState {
        mode,
        date,
        variable,
        kernel,
        view_type,
        compare_type,
        selection,
        show_uncertainty: parse_flag(params.uncert.as_deref()),
    };

    ResolvedView {
        catalog: OptionCatalog {
            dates,
            variables,
            kernels,
        },
        state,
    }
}
