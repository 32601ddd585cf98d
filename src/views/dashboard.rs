//! Dashboard View
//!
//! Root view of the window. Owns the poll timer for as long as it lives and
//! renders the latest dataset as summary cards, a paginated table and two bar
//! charts over the same page.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use futures::channel::mpsc::unbounded;
use gpui::{
    ClickEvent, Context, FocusHandle, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Task, Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

use crate::domain::{Dataset, PageSize};
use crate::helpers::{
    DASHBOARD_CONTEXT, NextPage, PreviousPage, format_interval_time, format_number,
};
use crate::services::{MisoClient, PollHandle, runtime_handle, spawn_poller};
use crate::states::{DashConfig, DashboardState, DisplayState};
use crate::theme::DashColors;
use crate::views::{BarChart, ChartSeries};

const TITLE: &str = "MISO Realtime Data Dashboard";
const TABLE_COLUMNS: [&str; 4] = ["Node", "LMP", "MCC", "MLC"];

pub struct DashboardView {
    state: DashboardState,
    source: Arc<MisoClient>,
    poll_period: Duration,
    focus_handle: FocusHandle,
    /// Timer handle; dropping it stops polling
    poller: Option<PollHandle>,
    /// Applies fetch events to `state` on the UI thread
    ingest_task: Option<Task<()>>,
}

impl DashboardView {
    pub fn new(
        config: &DashConfig,
        source: Arc<MisoClient>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        let mut view = Self {
            state: DashboardState::new(config.default_page_size),
            source,
            poll_period: config.poll_interval(),
            focus_handle,
            poller: None,
            ingest_task: None,
        };
        view.start_polling(cx);
        view
    }

    /// Start the poll timer and the event ingest loop
    pub fn start_polling(&mut self, cx: &mut Context<Self>) {
        if self.poller.is_some() || self.ingest_task.is_some() {
            tracing::warn!("Polling already running");
            return;
        }

        let (tx, mut rx) = unbounded();
        let poller = spawn_poller(&runtime_handle(), self.source.clone(), self.poll_period, tx);

        let task = cx.spawn(async move |this, cx| {
            while let Some(event) = rx.next().await {
                let applied = this.update(cx, |view, cx| {
                    if view.state.apply(event) {
                        cx.notify();
                    }
                });
                if applied.is_err() {
                    // View released
                    break;
                }
            }
        });

        tracing::info!(url = %self.source.url(), "Dashboard polling started");
        self.poller = Some(poller);
        self.ingest_task = Some(task);
    }

    // ==================== Pagination ====================

    pub fn set_page_size(&mut self, size: PageSize, cx: &mut Context<Self>) {
        if self.state.pagination().size() != size {
            self.state.set_page_size(size);
            cx.notify();
        }
    }

    pub fn go_next(&mut self, cx: &mut Context<Self>) {
        if self.state.next_page() {
            cx.notify();
        }
    }

    pub fn go_previous(&mut self, cx: &mut Context<Self>) {
        if self.state.previous_page() {
            cx.notify();
        }
    }

    fn on_next_page(&mut self, _: &NextPage, _window: &mut Window, cx: &mut Context<Self>) {
        self.go_next(cx);
    }

    fn on_previous_page(&mut self, _: &PreviousPage, _window: &mut Window, cx: &mut Context<Self>) {
        self.go_previous(cx);
    }

    // ==================== Rendering ====================

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let updated = self
            .state
            .last_updated()
            .map(|t| format!("Updated {}", t.format("%H:%M:%S")));
        let refreshing = self.state.is_loading() && self.state.dataset().is_some();

        h_flex()
            .w_full()
            .items_center()
            .justify_between()
            .child(Label::new(TITLE).text_2xl().font_semibold())
            .child(
                h_flex()
                    .gap_2()
                    .when(refreshing, |this| {
                        this.child(
                            Label::new("Refreshing…")
                                .text_xs()
                                .text_color(cx.theme().muted_foreground),
                        )
                    })
                    .when_some(updated, |this, updated| {
                        this.child(
                            Label::new(updated)
                                .text_sm()
                                .text_color(cx.theme().muted_foreground),
                        )
                    }),
            )
    }

    fn render_message(&self, message: &str, color: gpui::Hsla) -> impl IntoElement {
        div()
            .w_full()
            .py_8()
            .flex()
            .justify_center()
            .child(Label::new(message.to_string()).text_color(color))
    }

    fn render_stat_card(
        &self,
        title: &str,
        value: String,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .flex_1()
            .p_4()
            .gap_1()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                Label::new(title.to_string())
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(Label::new(value).text_xl().font_semibold())
    }

    fn render_summary(&self, dataset: &Dataset, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_4()
            .child(self.render_stat_card(
                "Start Time (UTC)",
                format_interval_time(dataset.interval_start.as_ref()),
                cx,
            ))
            .child(self.render_stat_card(
                "End Time (UTC)",
                format_interval_time(dataset.interval_end.as_ref()),
                cx,
            ))
            .child(self.render_stat_card("Node Count", dataset.node_count.to_string(), cx))
    }

    fn render_table(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let border = cx.theme().border;
        let hover_bg = cx.theme().secondary;
        let header = h_flex()
            .w_full()
            .px_4()
            .py_2()
            .bg(cx.theme().secondary)
            .border_b_1()
            .border_color(cx.theme().border)
            .children(TABLE_COLUMNS.iter().map(|name| {
                div()
                    .flex_1()
                    .child(Label::new(*name).text_sm().font_semibold())
            }));

        let rows = self.state.visible_nodes().iter().enumerate().map(|(i, node)| {
            let cells = [
                node.node.clone(),
                format_number(node.lmp.as_ref()),
                format_number(node.mcc.as_ref()),
                format_number(node.mlc.as_ref()),
            ];
            h_flex()
                .id(("node-row", i))
                .w_full()
                .px_4()
                .py_2()
                .border_b_1()
                .border_color(border)
                .hover(|this| this.bg(hover_bg))
                .children(cells.into_iter().map(|cell| {
                    div()
                        .flex_1()
                        .overflow_hidden()
                        .child(Label::new(cell).text_sm().text_ellipsis())
                }))
        });

        v_flex()
            .w_full()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .overflow_hidden()
            .child(header)
            .children(rows)
            .child(self.render_pagination(cx))
    }

    fn render_pagination(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let pagination = self.state.pagination();
        let total = self.state.total_rows();

        let size_buttons = PageSize::ALL.into_iter().map(|size| {
            let btn = Button::new(("page-size", size.get()))
                .small()
                .label(size.get().to_string())
                .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
                    this.set_page_size(size, cx);
                }));
            if size == pagination.size() {
                btn.primary()
            } else {
                btn.ghost()
            }
        });

        let prev_btn = Button::new("page-prev")
            .ghost()
            .small()
            .icon(IconName::ChevronLeft)
            .disabled(!pagination.has_previous())
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.go_previous(cx)));

        let next_btn = Button::new("page-next")
            .ghost()
            .small()
            .icon(IconName::ChevronRight)
            .disabled(!pagination.has_next(total))
            .on_click(cx.listener(|this, _: &ClickEvent, _, cx| this.go_next(cx)));

        h_flex()
            .w_full()
            .px_4()
            .py_2()
            .gap_4()
            .justify_end()
            .items_center()
            .child(
                h_flex()
                    .gap_1()
                    .items_center()
                    .child(
                        Label::new("Rows per page:")
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .children(size_buttons),
            )
            .child(Label::new(pagination.range_label(total)).text_sm())
            .child(h_flex().gap_1().child(prev_btn).child(next_btn))
    }

    fn render_charts(&self) -> impl IntoElement {
        let points = self.state.chart_points();
        let labels: Vec<String> = points.iter().map(|p| p.node_name.clone()).collect();

        let lmp_chart = BarChart::new("LMP", labels.clone()).series(ChartSeries::new(
            "LMP",
            DashColors::lmp(),
            points.iter().map(|p| p.lmp).collect(),
        ));
        let component_chart = BarChart::new("MCC and MLC", labels)
            .series(ChartSeries::new(
                "MCC",
                DashColors::mcc(),
                points.iter().map(|p| p.mcc).collect(),
            ))
            .series(ChartSeries::new(
                "MLC",
                DashColors::mlc(),
                points.iter().map(|p| p.mlc).collect(),
            ));

        h_flex()
            .w_full()
            .gap_4()
            .items_start()
            .child(lmp_chart)
            .child(component_chart)
    }

    fn render_content(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        match self.state.display_state() {
            DisplayState::Loading => self
                .render_message("Loading...", cx.theme().muted_foreground)
                .into_any_element(),
            DisplayState::Error(message) => self
                .render_message(message, cx.theme().danger)
                .into_any_element(),
            DisplayState::Ready(dataset) => v_flex()
                .w_full()
                .gap_6()
                .child(self.render_summary(dataset, cx))
                .child(self.render_table(cx))
                .child(self.render_charts())
                .into_any_element(),
        }
    }
}

impl Render for DashboardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("dashboard")
            .key_context(DASHBOARD_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_next_page))
            .on_action(cx.listener(Self::on_previous_page))
            .size_full()
            .overflow_y_scroll()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(
                v_flex()
                    .w_full()
                    .max_w(px(1200.0))
                    .mx_auto()
                    .p_6()
                    .gap_6()
                    .child(self.render_header(cx))
                    .child(self.render_content(cx)),
            )
    }
}
