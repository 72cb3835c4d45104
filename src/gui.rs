//! Native GUI viewer using egui
//!
//! Three presentation modes over the same catalog: growth curves,
//! grouped bar comparison, and a per-class mathematical breakdown.

use eframe::egui;
use tracing::{debug, info};

use crate::catalog::Complexity;
use crate::config::Config;
use crate::series::{breakdown, comparison_rows, generate_series, SeriesPoint};
use crate::view::{ViewMode, ViewState, MIN_SLIDER_N};

/// Run the native GUI viewer
pub fn run_viewer(config: Config) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_title("Growth Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Growth Explorer",
        options,
        Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

fn class_color(class: Complexity) -> egui::Color32 {
    let (r, g, b) = class.color();
    egui::Color32::from_rgb(r, g, b)
}

struct ExplorerApp {
    view: ViewState,
    /// Full series for the growth chart; recomputed when max_n changes.
    series: Vec<SeriesPoint>,
    log_scale: bool,
}

impl ExplorerApp {
    fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let view = config.initial_view_state();
        info!(
            "Viewer starting: mode={}, max_n={}, {} classes visible",
            view.mode.label(),
            view.max_n,
            view.visible_classes().len()
        );
        let series = generate_series(view.max_n);

        Self {
            view,
            series,
            log_scale: false,
        }
    }

    fn recompute_series(&mut self) {
        self.view.clamp();
        self.series = generate_series(self.view.max_n);
        debug!(
            "Recomputed {} series points for max_n={}",
            self.series.len(),
            self.view.max_n
        );
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Growth Explorer");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("View:");
            egui::ComboBox::from_id_salt("view_mode")
                .selected_text(self.view.mode.label())
                .show_ui(ui, |ui| {
                    for mode in ViewMode::ALL {
                        ui.selectable_value(&mut self.view.mode, mode, mode.label());
                    }
                });
        });

        let old_max_n = self.view.max_n;
        ui.add(egui::Slider::new(&mut self.view.max_n, MIN_SLIDER_N..=100).text("Max n"));
        if self.view.max_n != old_max_n {
            self.recompute_series();
        }

        ui.separator();

        if self.view.mode == ViewMode::Mathematical {
            ui.label("Complexity:");
            egui::ComboBox::from_id_salt("selected_complexity")
                .selected_text(self.view.selected.clone())
                .show_ui(ui, |ui| {
                    for class in Complexity::ALL {
                        ui.selectable_value(
                            &mut self.view.selected,
                            class.name().to_string(),
                            class.name(),
                        );
                    }
                });
        } else {
            ui.label("Visible classes:");
            for class in Complexity::ALL {
                let mut checked = self.view.visibility.get(&class).copied().unwrap_or(false);
                ui.horizontal(|ui| {
                    ui.colored_label(class_color(class), "●");
                    if ui.checkbox(&mut checked, class.name()).changed() {
                        self.view.set_visible(class, checked);
                        debug!("Visibility: {} -> {}", class.name(), checked);
                    }
                });
            }

            ui.separator();
            ui.checkbox(&mut self.log_scale, "Log scale (growth view)");
        }
    }

    fn growth_view(&self, ui: &mut egui::Ui) {
        let visible = self.view.visible_classes();
        if visible.is_empty() {
            ui.colored_label(
                egui::Color32::YELLOW,
                "Select at least one complexity class to display.",
            );
            return;
        }

        let log_scale = self.log_scale;
        let x_axis = egui_plot::AxisHints::new_x()
            .label("n")
            .formatter(|val, _range| format!("{:.0}", val.value));
        let y_axis = if log_scale {
            egui_plot::AxisHints::new_y()
                .label("operations")
                .formatter(|val, _range| format!("{:.0}", 10f64.powf(val.value) - 1.0))
        } else {
            egui_plot::AxisHints::new_y()
                .label("operations")
                .formatter(|val, _range| format!("{:.0}", val.value))
        };

        let plot = egui_plot::Plot::new("growth_plot")
            .legend(egui_plot::Legend::default())
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .include_x(1.0)
            .include_x(self.view.max_n as f64);

        plot.show(ui, |plot_ui| {
            for class in visible {
                let points = self.series.iter().map(|point| {
                    let value = point.values.get(&class).copied().unwrap_or(0.0);
                    // egui_plot has no native log axis, so map values
                    // through log10 and undo it in the tick formatter
                    let y = if log_scale { (value + 1.0).log10() } else { value };
                    [point.n as f64, y]
                });

                let line = egui_plot::Line::new(egui_plot::PlotPoints::from_iter(points))
                    .color(class_color(class))
                    .width(2.0)
                    .name(class.name());

                plot_ui.line(line);
            }
        });
    }

    fn comparison_view(&self, ui: &mut egui::Ui) {
        let visible = self.view.visible_classes();
        if visible.is_empty() {
            ui.colored_label(
                egui::Color32::YELLOW,
                "Select at least one complexity class to display.",
            );
            return;
        }

        let rows = comparison_rows(self.view.max_n, &visible);
        let labels: Vec<String> = rows.iter().map(|row| row.label.clone()).collect();

        // Group bars around integer x positions, one group per sample
        let group_width = 0.8;
        let bar_width = group_width / visible.len() as f64;

        let x_axis = egui_plot::AxisHints::new_x()
            .label("sample")
            .formatter(move |val, _range| {
                let idx = val.value.round();
                if (val.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < labels.len() {
                    labels[idx as usize].clone()
                } else {
                    String::new()
                }
            });

        let plot = egui_plot::Plot::new("comparison_plot")
            .legend(egui_plot::Legend::default())
            .custom_x_axes(vec![x_axis])
            .include_y(0.0);

        plot.show(ui, |plot_ui| {
            for (class_idx, &class) in visible.iter().enumerate() {
                let bars: Vec<egui_plot::Bar> = rows
                    .iter()
                    .enumerate()
                    .map(|(row_idx, row)| {
                        let value = row
                            .values
                            .iter()
                            .find(|(c, _)| *c == class)
                            .map(|(_, v)| *v)
                            .unwrap_or(0.0);
                        let x = row_idx as f64 - group_width / 2.0
                            + bar_width * (class_idx as f64 + 0.5);
                        egui_plot::Bar::new(x, value).width(bar_width * 0.9)
                    })
                    .collect();

                let chart = egui_plot::BarChart::new(bars)
                    .color(class_color(class))
                    .name(class.name());

                plot_ui.bar_chart(chart);
            }
        });
    }

    fn mathematical_view(&self, ui: &mut egui::Ui) {
        let class = match Complexity::from_name(&self.view.selected) {
            Ok(class) => class,
            Err(err) => {
                ui.colored_label(egui::Color32::RED, err.to_string());
                return;
            }
        };

        ui.heading(format!("{}   {}", class.name(), class.formula()));
        ui.label(class.explanation());
        ui.horizontal(|ui| {
            ui.label("Example:");
            ui.colored_label(class_color(class), class.example());
        });
        ui.separator();

        let rows = breakdown(class, self.view.max_n);

        egui::Grid::new("breakdown_grid")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                ui.strong("n");
                ui.strong("f(n)");
                ui.strong("growth factor");
                ui.end_row();

                for row in &rows {
                    ui.label(row.n.to_string());
                    ui.label(format!("{:.2}", row.value));
                    match row.growth_factor {
                        None => ui.label("baseline"),
                        Some(factor) if factor.is_finite() => ui.label(format!("×{:.2}", factor)),
                        Some(_) => ui.label("—"),
                    };
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls_panel")
            .min_width(230.0)
            .show(ctx, |ui| {
                self.controls_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.view.mode {
            ViewMode::Growth => self.growth_view(ui),
            ViewMode::Comparison => self.comparison_view(ui),
            ViewMode::Mathematical => self.mathematical_view(ui),
        });
    }
}
