use {
    chrono::{Local, NaiveDate},
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Color32, Context, ScrollArea, TopBottomPanel},
    },
    serde::{Deserialize, Serialize},
    std::thread,
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    config::CONTROLS,
    data::{ForecastClient, ForecastProvider},
    domain::{CategoryShare, ForecastPoint},
    store::{RemoteStore, Resource},
    ui::{
        ExportPanel, ForecastPlotView, PieView, UI_CONFIG, UI_TEXT, apply_theme, controls_bar,
        derive_pie_colors, error_box, loading_box,
    },
    util::date::wall_clock_day,
    viewport::ViewportSelector,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Only the forecast request parameters and theme persist across sessions.
    pub(crate) selected_date: NaiveDate,
    pub(crate) forecast_months: u32,
    pub(crate) dark_mode: bool,
    #[serde(skip)]
    pub(crate) forecast_store: RemoteStore<Vec<ForecastPoint>>,
    #[serde(skip)]
    pub(crate) countries_store: RemoteStore<Vec<CategoryShare>>,
    #[serde(skip)]
    pub(crate) selector: ViewportSelector,
    #[serde(skip)]
    pub(crate) plot_view: ForecastPlotView,
    #[serde(skip)]
    pub(crate) export_panel: ExportPanel,
    #[serde(skip)]
    pub(crate) pie_colors: Vec<Color32>,
    #[serde(skip)]
    pub(crate) api_url: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected_date: CONTROLS.clamp_day(wall_clock_day(Local::now())),
            forecast_months: 12,
            dark_mode: true,
            forecast_store: RemoteStore::new(),
            countries_store: RemoteStore::new(),
            selector: ViewportSelector::default(),
            plot_view: ForecastPlotView::default(),
            export_panel: ExportPanel::default(),
            pie_colors: Vec::new(),
            api_url: String::new(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };
        app.api_url = args.api_url;
        apply_theme(&cc.egui_ctx, app.dark_mode);

        // Populate both panels with the restored parameters on startup.
        app.trigger_forecast();

        app
    }

    /// Kick off both fetches on a background thread. The stores stay
    /// responsive while the requests run; a late response from an earlier
    /// trigger simply gets overwritten by whichever lands last.
    pub(crate) fn trigger_forecast(&mut self) {
        let start_day = CONTROLS.clamp_day(self.selected_date);
        let months = CONTROLS.clamp_months(self.forecast_months);
        let api_url = self.api_url.clone();

        let forecast_tx = self.forecast_store.begin();
        let countries_tx = self.countries_store.begin();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("failed to create fetch runtime: {e}");
                    return;
                }
            };
            rt.block_on(async move {
                let client = match ForecastClient::new(api_url) {
                    Ok(client) => client,
                    Err(e) => {
                        let _ = forecast_tx.send(Err(e.clone()));
                        let _ = countries_tx.send(Err(e));
                        return;
                    }
                };
                let forecast = client.fetch_forecast(start_day, months).await;
                let _ = forecast_tx.send(forecast);
                let countries = client.fetch_top_countries(start_day, months).await;
                let _ = countries_tx.send(countries);
            });
        });
    }

    fn render_forecast_panel(&mut self, ui: &mut eframe::egui::Ui) {
        match self.forecast_store.status() {
            Resource::Idle => {}
            Resource::Loading => loading_box(ui),
            Resource::Error => {
                error_box(ui, UI_TEXT.chart_error_title, self.forecast_store.error());
            }
            Resource::Success => {
                let data = self.forecast_store.data();
                if data.is_empty() {
                    ui.vertical_centered(|ui| ui.label(UI_TEXT.no_data));
                } else {
                    let data = data.clone();
                    self.plot_view.show(ui, &data, &mut self.selector);
                }
            }
        }
    }

    fn render_countries_panel(&mut self, ui: &mut eframe::egui::Ui) {
        ui.heading(UI_TEXT.pie_heading);
        match self.countries_store.status() {
            Resource::Idle => {}
            Resource::Loading => loading_box(ui),
            Resource::Error => {
                error_box(ui, UI_TEXT.pie_error_title, self.countries_store.error());
            }
            Resource::Success => {
                let shares = self.countries_store.data();
                if shares.is_empty() {
                    ui.vertical_centered(|ui| ui.label(UI_TEXT.no_data));
                } else {
                    PieView::show(ui, shares, &self.pie_colors);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.forecast_store.poll() {
            // A fresh dataset invalidates any zoom or selection on the old one.
            self.selector.reset();
        }
        if self.countries_store.poll() {
            self.pie_colors = derive_pie_colors(self.countries_store.data().len());
        }
        if self.forecast_store.status() == Resource::Loading
            || self.countries_store.status() == Resource::Loading
        {
            ctx.request_repaint();
        }

        TopBottomPanel::top("controls")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                let output = controls_bar(
                    ui,
                    &mut self.selected_date,
                    &mut self.forecast_months,
                    &mut self.dark_mode,
                    &mut self.plot_view.kind,
                );
                if output.theme_changed {
                    apply_theme(ctx, self.dark_mode);
                }
                if output.reset_view {
                    self.selector.reset();
                }
                if output.forecast_requested {
                    self.trigger_forecast();
                }
                if output.open_export {
                    self.export_panel.open_for(self.forecast_store.data());
                }
            });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.render_forecast_panel(ui);
                ui.add_space(UI_CONFIG.panel_spacing);
                ui.separator();
                self.render_countries_panel(ui);
                ui.add_space(UI_CONFIG.panel_spacing);
                ui.small(UI_TEXT.footnote);
            });
        });

        let data = self.forecast_store.data().clone();
        self.export_panel.show(ctx, &data);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
