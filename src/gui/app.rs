use crate::config::{self, Config, PanelPosition, ThemePreference};
use crate::events::AppEvent;
use crate::gui::content;
use crate::gui::diagram::{self, DiagramLayout};
use crate::gui::panel::{self, PanelState, Summary};
use crate::gui::theme::{self, ThemeColors};
use crate::params::{Control, DIMENSION_RANGE, INNER_RADIUS_RANGE, Params};
use crate::snippet::StyleSnippet;
use crate::sys::clipboard;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Drop-down entries, in `PanelPosition` index order.
pub const POSITION_LABELS: [&str; 4] = ["Top Left", "Top Right", "Bottom Left", "Bottom Right"];
/// Drop-down entries, in `ThemePreference` index order.
pub const THEME_LABELS: [&str; 3] = ["Light", "Dark", "System"];

pub struct AppModel {
    pub params: Rc<RefCell<Params>>,
    pub panel: PanelState,
    pub theme: ThemePreference,
    pub platform_dark: bool,
    pub diagram_area: gtk::DrawingArea,
    pub comparison_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Set(Control, u32),
    TogglePanel,
    MovePanel(PanelPosition),
    SetTheme(ThemePreference),
    CopySnippet,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

pub struct AppInit {
    pub params: Params,
    pub config: Config,
    pub events: async_channel::Receiver<AppEvent>,
}

impl AppModel {
    fn params(&self) -> Params {
        *self.params.borrow()
    }

    fn canvas_size(&self) -> i32 {
        DiagramLayout::from(&self.params()).canvas_size.ceil() as i32
    }

    fn summary(&self) -> Summary {
        Summary::from(&self.params())
    }

    fn snippet(&self) -> String {
        StyleSnippet::from(&self.params()).to_string()
    }

    fn apply_theme(&mut self, preference: ThemePreference) {
        self.theme = preference;
        theme::apply_preference(preference, self.platform_dark);
        self.diagram_area.queue_draw();
        self.comparison_area.queue_draw();
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Rim"),
            set_default_size: (1100, 860),

            gtk::Overlay {
                #[wrap(Some)]
                set_child = &gtk::ScrolledWindow {
                    set_hscrollbar_policy: gtk::PolicyType::Never,

                    #[wrap(Some)]
                    set_child = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 16,
                        set_margin_all: 24,

                        gtk::Label {
                            set_label: "Rim",
                            add_css_class: "title-1",
                        },

                        gtk::Label {
                            set_label: "Fast and intuitive radius calculations",
                            add_css_class: "dim-label",
                        },

                        #[name = "diagram_area"]
                        gtk::DrawingArea {
                            set_halign: gtk::Align::Center,
                            #[watch]
                            set_content_width: model.canvas_size(),
                            #[watch]
                            set_content_height: model.canvas_size(),
                        },

                        gtk::Label {
                            set_label: "Understanding the Math: Right vs Wrong",
                            add_css_class: "title-2",
                            set_margin_top: 32,
                        },

                        #[name = "comparison_area"]
                        gtk::DrawingArea {
                            set_halign: gtk::Align::Center,
                            set_content_width: comparison_width,
                            set_content_height: comparison_height,
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_spacing: 24,
                            set_homogeneous: true,
                            set_halign: gtk::Align::Center,
                            set_width_request: 720,

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 8,

                                gtk::Label {
                                    set_label: "✗ Wrong Approach",
                                    set_css_classes: &["heading", "error"],
                                    set_xalign: 0.0,
                                },
                                gtk::Label {
                                    set_label: "Using the same radius for both outer container and inner content creates visual inconsistency. The inner content appears to have sharper corners than intended.",
                                    set_wrap: true,
                                    set_xalign: 0.0,
                                },
                                gtk::Label {
                                    set_label: "outer_radius = inner_radius = 20px",
                                    add_css_class: "monospace",
                                    set_xalign: 0.0,
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 8,

                                gtk::Label {
                                    set_label: "✓ Correct Approach",
                                    set_css_classes: &["heading", "success"],
                                    set_xalign: 0.0,
                                },
                                gtk::Label {
                                    set_label: "Start with your desired inner content radius, then add padding. The outer radius adjusts automatically to maintain visual consistency.",
                                    set_wrap: true,
                                    set_xalign: 0.0,
                                },
                                gtk::Label {
                                    set_label: "outer_radius = inner_radius + padding",
                                    add_css_class: "monospace",
                                    set_xalign: 0.0,
                                },
                            },
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_spacing: 24,
                            set_homogeneous: true,
                            set_halign: gtk::Align::Center,
                            set_width_request: 720,
                            set_margin_top: 16,

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 8,

                                gtk::Label {
                                    set_label: "The Formula",
                                    add_css_class: "heading",
                                    set_xalign: 0.0,
                                },
                                gtk::Label {
                                    set_label: content::FORMULA,
                                    add_css_class: "monospace",
                                    set_wrap: true,
                                    set_xalign: 0.0,
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 8,

                                gtk::Label {
                                    set_label: "Why It Matters",
                                    add_css_class: "heading",
                                    set_xalign: 0.0,
                                },
                                gtk::Label {
                                    set_label: content::WHY_IT_MATTERS,
                                    set_wrap: true,
                                    set_xalign: 0.0,
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 8,

                                gtk::Label {
                                    set_label: "Common Use Cases",
                                    add_css_class: "heading",
                                    set_xalign: 0.0,
                                },
                                gtk::Label {
                                    set_label: &content::bullet_list(&content::USE_CASES),
                                    set_xalign: 0.0,
                                },
                            },
                        },

                        gtk::Label {
                            set_markup: &content::footer_markup(),
                            add_css_class: "dim-label",
                            set_margin_top: 24,
                        },
                    },
                },

                add_overlay = &gtk::Frame {
                    add_css_class: "rim-panel",
                    set_width_request: 320,
                    set_margin_all: 16,
                    #[watch]
                    set_halign: model.panel.halign(),
                    #[watch]
                    set_valign: model.panel.valign(),

                    #[wrap(Some)]
                    set_child = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 12,
                        set_margin_all: 12,

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_spacing: 8,

                            gtk::Label {
                                set_label: "Interactive Calculator",
                                add_css_class: "heading",
                                set_hexpand: true,
                                set_xalign: 0.0,
                            },

                            gtk::DropDown::from_strings(&POSITION_LABELS) {
                                #[watch]
                                #[block_signal(position_handler)]
                                set_selected: model.panel.position.as_index() as u32,
                                connect_selected_notify[sender] => move |dd| {
                                    if let Some(position) = PanelPosition::from_index(dd.selected() as usize) {
                                        sender.input(AppMsg::MovePanel(position));
                                    }
                                } @position_handler,
                            },

                            gtk::Button {
                                add_css_class: "flat",
                                #[watch]
                                set_icon_name: model.panel.toggle_icon(),
                                connect_clicked => AppMsg::TogglePanel,
                            },
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_spacing: 12,
                            #[watch]
                            set_visible: !model.panel.collapsed,

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 4,

                                gtk::Box {
                                    set_orientation: gtk::Orientation::Horizontal,
                                    gtk::Label {
                                        set_label: &Control::InnerRadius.to_string(),
                                        set_hexpand: true,
                                        set_xalign: 0.0,
                                    },
                                    gtk::Label {
                                        add_css_class: "monospace",
                                        #[watch]
                                        set_label: &panel::slider_value_label(&model.params(), Control::InnerRadius),
                                    },
                                },
                                gtk::Scale {
                                    set_hexpand: true,
                                    set_draw_value: false,
                                    set_round_digits: 0,
                                    set_increments: (1.0, 5.0),
                                    set_range: (*INNER_RADIUS_RANGE.start() as f64, *INNER_RADIUS_RANGE.end() as f64),
                                    #[watch]
                                    #[block_signal(inner_radius_handler)]
                                    set_value: model.params().inner_radius() as f64,
                                    connect_value_changed[sender] => move |scale| {
                                        sender.input(AppMsg::Set(Control::InnerRadius, scale.value().round() as u32));
                                    } @inner_radius_handler,
                                },
                                gtk::Label {
                                    set_label: panel::slider_note(Control::InnerRadius),
                                    add_css_class: "rim-note",
                                    set_wrap: true,
                                    set_xalign: 0.0,
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 4,

                                gtk::Box {
                                    set_orientation: gtk::Orientation::Horizontal,
                                    gtk::Label {
                                        set_label: &Control::Padding.to_string(),
                                        set_hexpand: true,
                                        set_xalign: 0.0,
                                    },
                                    gtk::Label {
                                        add_css_class: "monospace",
                                        #[watch]
                                        set_label: &panel::slider_value_label(&model.params(), Control::Padding),
                                    },
                                },
                                gtk::Scale {
                                    set_hexpand: true,
                                    set_draw_value: false,
                                    set_round_digits: 0,
                                    set_increments: (1.0, 5.0),
                                    #[watch]
                                    #[block_signal(padding_handler)]
                                    set_range: (0.0, model.params().max_padding() as f64),
                                    #[watch]
                                    #[block_signal(padding_handler)]
                                    set_value: model.params().padding() as f64,
                                    connect_value_changed[sender] => move |scale| {
                                        sender.input(AppMsg::Set(Control::Padding, scale.value().round() as u32));
                                    } @padding_handler,
                                },
                                gtk::Label {
                                    set_label: panel::slider_note(Control::Padding),
                                    add_css_class: "rim-note",
                                    set_wrap: true,
                                    set_xalign: 0.0,
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 4,

                                gtk::Box {
                                    set_orientation: gtk::Orientation::Horizontal,
                                    gtk::Label {
                                        set_label: &Control::Dimension.to_string(),
                                        set_hexpand: true,
                                        set_xalign: 0.0,
                                    },
                                    gtk::Label {
                                        add_css_class: "monospace",
                                        #[watch]
                                        set_label: &panel::slider_value_label(&model.params(), Control::Dimension),
                                    },
                                },
                                gtk::Scale {
                                    set_hexpand: true,
                                    set_draw_value: false,
                                    set_round_digits: 0,
                                    set_increments: (1.0, 10.0),
                                    set_range: (*DIMENSION_RANGE.start() as f64, *DIMENSION_RANGE.end() as f64),
                                    #[watch]
                                    #[block_signal(dimension_handler)]
                                    set_value: model.params().dimension() as f64,
                                    connect_value_changed[sender] => move |scale| {
                                        sender.input(AppMsg::Set(Control::Dimension, scale.value().round() as u32));
                                    } @dimension_handler,
                                },
                                gtk::Label {
                                    set_label: panel::slider_note(Control::Dimension),
                                    add_css_class: "rim-note",
                                    set_wrap: true,
                                    set_xalign: 0.0,
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 4,
                                add_css_class: "rim-summary",

                                gtk::Label {
                                    set_label: "Live Calculations",
                                    add_css_class: "heading",
                                    set_xalign: 0.0,
                                },
                                gtk::Box {
                                    set_orientation: gtk::Orientation::Horizontal,
                                    gtk::Label {
                                        set_label: "Inner Radius:",
                                        set_hexpand: true,
                                        set_xalign: 0.0,
                                    },
                                    gtk::Label {
                                        add_css_class: "monospace",
                                        #[watch]
                                        set_label: &model.summary().inner_radius,
                                        #[watch]
                                        set_class_active: ("rim-max", model.summary().inner_at_max),
                                    },
                                },
                                gtk::Box {
                                    set_orientation: gtk::Orientation::Horizontal,
                                    gtk::Label {
                                        set_label: "Padding:",
                                        set_hexpand: true,
                                        set_xalign: 0.0,
                                    },
                                    gtk::Label {
                                        add_css_class: "monospace",
                                        #[watch]
                                        set_label: &model.summary().padding,
                                        #[watch]
                                        set_class_active: ("rim-max", model.summary().padding_at_max),
                                    },
                                },
                                gtk::Separator {},
                                gtk::Box {
                                    set_orientation: gtk::Orientation::Horizontal,
                                    gtk::Label {
                                        set_label: "Outer Radius:",
                                        set_hexpand: true,
                                        set_xalign: 0.0,
                                    },
                                    gtk::Label {
                                        set_css_classes: &["monospace", "success"],
                                        #[watch]
                                        set_label: &model.summary().outer_radius,
                                    },
                                },
                                gtk::Label {
                                    add_css_class: "dim-label",
                                    set_xalign: 0.0,
                                    #[watch]
                                    set_label: &model.summary().formula,
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 6,

                                gtk::Box {
                                    set_orientation: gtk::Orientation::Horizontal,
                                    gtk::Label {
                                        set_label: "Generated CSS:",
                                        add_css_class: "heading",
                                        set_hexpand: true,
                                        set_xalign: 0.0,
                                    },
                                    gtk::Button {
                                        set_icon_name: "edit-copy-symbolic",
                                        set_tooltip_text: Some("Copy CSS"),
                                        add_css_class: "flat",
                                        connect_clicked => AppMsg::CopySnippet,
                                    },
                                },
                                gtk::Label {
                                    add_css_class: "rim-code",
                                    set_selectable: true,
                                    set_xalign: 0.0,
                                    #[watch]
                                    set_label: &model.snippet(),
                                },
                            },

                            gtk::Box {
                                set_orientation: gtk::Orientation::Horizontal,
                                set_spacing: 8,

                                gtk::Label {
                                    set_label: "Theme",
                                    set_hexpand: true,
                                    set_xalign: 0.0,
                                },
                                gtk::DropDown::from_strings(&THEME_LABELS) {
                                    #[watch]
                                    #[block_signal(theme_handler)]
                                    set_selected: model.theme.as_index() as u32,
                                    connect_selected_notify[sender] => move |dd| {
                                        if let Some(preference) = ThemePreference::from_index(dd.selected() as usize) {
                                            sender.input(AppMsg::SetTheme(preference));
                                        }
                                    } @theme_handler,
                                },
                            },
                        },
                    },
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            params,
            config,
            events,
        } = init;

        theme::load_css();
        let platform_dark = theme::platform_prefers_dark();
        let (comparison_width, comparison_height) = {
            let (w, h) = diagram::comparison_size();
            (w.ceil() as i32, h.ceil() as i32)
        };

        let model = AppModel {
            params: Rc::new(RefCell::new(params)),
            panel: PanelState::from(&config.panel),
            theme: config.theme,
            platform_dark,
            diagram_area: gtk::DrawingArea::default(),
            comparison_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.diagram_area = widgets.diagram_area.clone();
        model.comparison_area = widgets.comparison_area.clone();
        model.apply_theme(config.theme);

        let params_draw = model.params.clone();
        widgets
            .diagram_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                let layout = DiagramLayout::from(&*params_draw.borrow());
                if let Err(e) = diagram::draw_diagram(cr, &layout, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        widgets
            .comparison_area
            .set_draw_func(move |drawing_area, cr, width, _| {
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                if let Err(e) = diagram::draw_comparison(cr, width as f64, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Set(control, value) => {
                self.params.borrow_mut().set(control, value);
                let params = self.params();
                log::debug!(
                    "{} -> {}: outer radius {} ({} + {})",
                    control,
                    value,
                    params.outer_radius(),
                    params.inner_radius(),
                    params.padding()
                );
                self.diagram_area.queue_draw();
            }
            AppMsg::TogglePanel => {
                self.panel.toggle_collapsed();
            }
            AppMsg::MovePanel(position) => {
                self.panel.position = position;
            }
            AppMsg::SetTheme(preference) => {
                self.apply_theme(preference);
            }
            AppMsg::CopySnippet => {
                clipboard::copy_text(&self.snippet());
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.panel = PanelState::from(&new_config.panel);
                    self.apply_theme(new_config.theme);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_drop_down_labels_follow_enum_order() {
        let positions: Vec<String> = PanelPosition::iter().map(|p| p.to_string()).collect();
        assert_eq!(positions, POSITION_LABELS);

        let themes: Vec<String> = ThemePreference::iter().map(|t| t.to_string()).collect();
        assert_eq!(themes, THEME_LABELS);
    }
}
