//! Simple bar graph demo.
//!
//! Drag to scroll, pinch or ctrl + wheel to zoom, click a bar to select it.

use eframe::egui::{self, CentralPanel, Visuals};
use egui_bargraph::{AxisModel, BarGraph, BarGraphModel, BarModel, BarStyle, Point};
use plotters::style::{RGBColor, BLUE};
use tracing_subscriber::EnvFilter;

const Y_STEPS: u32 = 5;
const MAX_RANGE: usize = 100;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("starting bar graph demo");

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Bar Graph Example",
        native_options,
        Box::new(|cc| Ok(Box::new(BarGraphExample::new(cc)))),
    )
}

struct BarGraphExample {
    model: BarGraphModel,
    selected: Option<usize>,
}

impl BarGraphExample {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals::light());

        let palette = [
            RGBColor(0xef, 0x53, 0x50),
            RGBColor(0x42, 0xa5, 0xf5),
            RGBColor(0x66, 0xbb, 0x6a),
            RGBColor(0xff, 0xa7, 0x26),
            RGBColor(0xab, 0x47, 0xbc),
        ];
        let items = [(0.0, 8.0), (1.0, 4.0), (2.0, 2.0), (3.0, 6.0), (4.0, 10.0)]
            .into_iter()
            .zip(palette)
            .map(|((x, y), color)| BarModel::new(Point::new(x, y)).color(color))
            .collect();

        let x_axis = AxisModel::builder()
            .first_item_offset(40.0)
            .label_data(|index| format!("Bar {}", index + 1))
            .build();
        let y_axis = AxisModel::builder()
            .steps(Y_STEPS)
            .label_data(|index| (index * MAX_RANGE / Y_STEPS as usize).to_string())
            .build();

        let model = BarGraphModel::new(items, x_axis, y_axis)
            .bar_style(BarStyle {
                bar_width: 50.0,
                ..BarStyle::default()
            })
            .highlight_color(BLUE);

        Self {
            model,
            selected: None,
        }
    }
}

impl eframe::App for BarGraphExample {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            let label = match self.selected.and_then(|index| self.model.items.get(index)) {
                Some(bar) => format!("Selected: x = {}, y = {}", bar.point.x, bar.point.y),
                None => "Tap a bar".to_string(),
            };
            ui.heading(label);

            self.selected = BarGraph::new(&self.model).height(320.0).show(ui).selected;
        });
    }
}
