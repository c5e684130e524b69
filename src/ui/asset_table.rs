use {
    crate::{
        config::{PLOT_CONFIG, TABLE},
        domain::Currency,
        models::{AssetRow, SortColumn, SortDirection},
        ui::{
            BoardEvent, Panel, Sparkline, UI_TEXT, UiStyleExt,
            ui_text::{ICON_SORT_ASC, ICON_SORT_DESC, ICON_STAR},
        },
        utils::{format_money, format_pct},
    },
    eframe::egui::{Align, Button, Layout, ProgressBar, RichText, Sense, Ui, Vec2},
    egui_extras::{Column, TableBuilder},
    strum::IntoEnumIterator,
};

/// The paged market table. Emits sort, watch and detail events.
pub struct AssetTablePanel<'a> {
    rows: Vec<AssetRow<'a>>,
    currency: Currency,
    sort: Option<(SortColumn, SortDirection)>,
    watch_only: bool,
}

impl<'a> AssetTablePanel<'a> {
    pub fn new(
        rows: Vec<AssetRow<'a>>,
        currency: Currency,
        sort: Option<(SortColumn, SortDirection)>,
        watch_only: bool,
    ) -> Self {
        Self {
            rows,
            currency,
            sort,
            watch_only,
        }
    }

    fn header_text(&self, column: SortColumn) -> String {
        match self.sort {
            Some((c, SortDirection::Ascending)) if c == column => {
                format!("{} {}", column, ICON_SORT_ASC)
            }
            Some((c, SortDirection::Descending)) if c == column => {
                format!("{} {}", column, ICON_SORT_DESC)
            }
            _ => column.to_string(),
        }
    }

    fn column_for(column: SortColumn) -> Column {
        match column {
            SortColumn::Rank => Column::exact(32.0),
            SortColumn::Name => Column::initial(180.0).at_least(120.0),
            SortColumn::Price => Column::initial(130.0).at_least(90.0),
            SortColumn::Change1h | SortColumn::Change24h | SortColumn::Change7d => {
                Column::initial(70.0).at_least(60.0)
            }
            SortColumn::MarketCap => Column::initial(150.0).at_least(100.0),
            SortColumn::Volume24h => Column::initial(140.0).at_least(100.0),
            SortColumn::Supply => Column::exact(TABLE.supply_bar_width + 8.0),
        }
    }
}

impl Panel for AssetTablePanel<'_> {
    type Event = BoardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<BoardEvent> {
        let mut events = Vec::new();

        if self.rows.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                let msg = if self.watch_only {
                    &UI_TEXT.table_empty_watchlist
                } else {
                    &UI_TEXT.table_empty
                };
                ui.label(RichText::new(msg.as_str()).italics().color(PLOT_CONFIG.color_text_subdued));
            });
            return events;
        }

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .sense(Sense::click())
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in SortColumn::iter() {
            table = table.column(Self::column_for(column));
        }
        table = table.column(Column::exact(TABLE.sparkline_width + 8.0));

        table
            .header(TABLE.header_height, |mut header| {
                for column in SortColumn::iter() {
                    header.col(|ui| {
                        let text = RichText::new(self.header_text(column)).strong();
                        if ui.add(Button::new(text).frame(false)).clicked() {
                            events.push(BoardEvent::Sort(column));
                        }
                    });
                }
                header.col(|ui| {
                    ui.strong(UI_TEXT.col_sparkline.as_str());
                });
            })
            .body(|mut body| {
                for r in &self.rows {
                    let asset = r.asset;
                    body.row(TABLE.row_height, |mut row| {
                        let mut star_clicked = false;

                        row.col(|ui| {
                            ui.label_subdued(asset.rank.to_string());
                        });
                        row.col(|ui| {
                            let (star_color, tip) = if r.watched {
                                (PLOT_CONFIG.color_star_on, &UI_TEXT.tooltip_watch_remove)
                            } else {
                                (PLOT_CONFIG.color_star_off, &UI_TEXT.tooltip_watch_add)
                            };
                            if ui
                                .add(Button::new(RichText::new(ICON_STAR).color(star_color)).frame(false))
                                .on_hover_text(tip.as_str())
                                .clicked()
                            {
                                star_clicked = true;
                                events.push(BoardEvent::ToggleWatch(asset.symbol.clone()));
                            }
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&asset.name).strong());
                                ui.label_subdued(asset.symbol.as_str());
                            });
                        });
                        row.col(|ui| {
                            ui.label(format_money(self.currency, r.price));
                        });
                        row.col(|ui| {
                            ui.pct_label(asset.percent_change_1h);
                        });
                        row.col(|ui| {
                            ui.pct_label(asset.percent_change_24h);
                        });
                        row.col(|ui| {
                            ui.pct_label(asset.percent_change_7d);
                        });
                        // Aggregates stay in USD whatever the display currency
                        row.col(|ui| {
                            ui.label(format_money(Currency::Usd, asset.market_cap_usd));
                        });
                        row.col(|ui| {
                            ui.label(format_money(Currency::Usd, asset.volume_24h_usd));
                        });
                        row.col(|ui| match r.supply_pct {
                            Some(pct) => {
                                ui.add(
                                    ProgressBar::new((pct / 100.0).clamp(0.0, 1.0) as f32)
                                        .desired_width(TABLE.supply_bar_width)
                                        .desired_height(8.0)
                                        .fill(PLOT_CONFIG.color_bar_fill),
                                )
                                .on_hover_text(format_pct(pct));
                            }
                            None => {
                                ui.label_subdued(UI_TEXT.label_unknown.as_str());
                            }
                        });
                        row.col(|ui| {
                            ui.add(Sparkline::new(
                                &asset.sparkline,
                                r.trend,
                                Vec2::new(TABLE.sparkline_width, TABLE.sparkline_height),
                            ));
                        });

                        let response = row.response();
                        if response.clicked() && !star_clicked {
                            events.push(BoardEvent::OpenDetail(asset.symbol.clone()));
                        }
                        response.on_hover_text(UI_TEXT.tooltip_open_detail.as_str());
                    });
                }
            });

        events
    }
}
