//! Bar Chart
//!
//! Vertical bar chart over the nodes of the current page. One group per node,
//! one bar per series, all bars sharing a y scale that includes zero.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{ActiveTheme, StyledExt, h_flex, label::Label, v_flex};

use crate::constants::{CHART_LABEL_MAX_CHARS, CHART_PLOT_HEIGHT};
use crate::domain::BarScale;
use crate::helpers::{format_f64, truncate};
use crate::theme::DashColors;

const AXIS_WIDTH: f32 = 64.0;

/// One colored series of values, aligned with the chart's labels
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub name: SharedString,
    pub color: Rgba,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<SharedString>, color: Rgba, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }
}

#[derive(IntoElement)]
pub struct BarChart {
    title: SharedString,
    labels: Vec<String>,
    series: Vec<ChartSeries>,
}

impl BarChart {
    pub fn new(title: impl Into<SharedString>, labels: Vec<String>) -> Self {
        Self {
            title: title.into(),
            labels,
            series: Vec::new(),
        }
    }

    pub fn series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    fn scale(&self) -> BarScale {
        BarScale::from_values(self.series.iter().flat_map(|s| s.values.iter().copied()))
    }

    fn render_legend(&self, cx: &App) -> impl IntoElement {
        h_flex()
            .gap_4()
            .justify_center()
            .children(self.series.iter().map(|s| {
                h_flex()
                    .gap_1()
                    .items_center()
                    .child(div().size(px(10.0)).bg(s.color))
                    .child(
                        Label::new(s.name.clone())
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    )
            }))
    }

    /// One node's bars, each in its own full-height lane
    fn render_group(&self, index: usize, scale: &BarScale) -> impl IntoElement {
        h_flex()
            .flex_1()
            .h_full()
            .px_1()
            .gap_px()
            .children(self.series.iter().map(|s| {
                let value = s.values.get(index).copied().unwrap_or(0.0);
                let extent = scale.extent(value);
                div().relative().flex_1().h_full().child(
                    div()
                        .absolute()
                        .left_0()
                        .right_0()
                        .bottom(px(extent.bottom * CHART_PLOT_HEIGHT))
                        .h(px(extent.height * CHART_PLOT_HEIGHT))
                        .bg(s.color),
                )
            }))
    }

    fn render_plot(&self, scale: &BarScale, cx: &App) -> impl IntoElement {
        let axis_label = |value: f64| {
            Label::new(format_f64(value))
                .text_xs()
                .text_color(cx.theme().muted_foreground)
        };

        h_flex()
            .w_full()
            .h(px(CHART_PLOT_HEIGHT))
            .child(
                v_flex()
                    .w(px(AXIS_WIDTH))
                    .h_full()
                    .pr_1()
                    .items_end()
                    .justify_between()
                    .child(axis_label(scale.max()))
                    .child(axis_label(scale.min())),
            )
            .child(
                div()
                    .relative()
                    .flex_1()
                    .h_full()
                    .border_l_1()
                    .border_b_1()
                    .border_color(DashColors::grid())
                    // Zero line
                    .child(
                        div()
                            .absolute()
                            .left_0()
                            .right_0()
                            .bottom(px(scale.baseline() * CHART_PLOT_HEIGHT))
                            .h_px()
                            .bg(DashColors::baseline()),
                    )
                    .child(
                        h_flex()
                            .size_full()
                            .children((0..self.labels.len()).map(|i| self.render_group(i, scale))),
                    ),
            )
    }

    fn render_x_labels(&self, cx: &App) -> impl IntoElement {
        h_flex()
            .w_full()
            .pl(px(AXIS_WIDTH))
            .children(self.labels.iter().map(|label| {
                div().flex_1().overflow_hidden().flex().justify_center().child(
                    Label::new(truncate(label, CHART_LABEL_MAX_CHARS))
                        .text_xs()
                        .text_color(cx.theme().muted_foreground),
                )
            }))
    }
}

impl RenderOnce for BarChart {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let header = Label::new(self.title.clone()).text_sm().font_semibold();

        let body = if self.labels.is_empty() {
            div()
                .h(px(CHART_PLOT_HEIGHT))
                .flex()
                .items_center()
                .justify_center()
                .child(
                    Label::new("No data")
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element()
        } else {
            let scale = self.scale();
            v_flex()
                .w_full()
                .gap_1()
                .child(self.render_plot(&scale, cx))
                .child(self.render_x_labels(cx))
                .into_any_element()
        };

        v_flex()
            .flex_1()
            .min_w_0()
            .p_4()
            .gap_3()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(header)
            .child(body)
            .child(self.render_legend(cx))
    }
}
