use crate::config;
use crate::events::AppEvent;
use crate::gui::board::{self, BoardModel};
use crate::gui::theme::{self, ThemeColors};
use dartcore::{DartNumber, Mode};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub board: Rc<RefCell<BoardModel>>,
    pub training: bool,
    pub hardcore: bool,
    pub status: String,
    pub drawing_area: gtk::DrawingArea,
    pub tray_buttons: Vec<(DartNumber, gtk::Button)>,
}

#[derive(Debug)]
pub enum AppMsg {
    Select(DartNumber),
    BoardClick(f64, f64),
    Toggle(Mode),
    Reset,
    Frame,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Frame => AppMsg::Frame,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (BoardModel, i32, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Dartboard"),

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 8,
                set_margin_all: 8,

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 8,

                    gtk::Button {
                        set_label: "Training",
                        add_css_class: "mode-button",
                        #[watch]
                        set_class_active: ("active", model.training),
                        connect_clicked => AppMsg::Toggle(Mode::Training),
                    },

                    gtk::Button {
                        set_label: "Hardcore",
                        add_css_class: "mode-button",
                        #[watch]
                        set_class_active: ("active", model.hardcore),
                        connect_clicked => AppMsg::Toggle(Mode::Hardcore),
                    },

                    gtk::Button {
                        set_label: "Reset",
                        connect_clicked => AppMsg::Reset,
                    },

                    gtk::Label {
                        set_hexpand: true,
                        set_xalign: 1.0,
                        #[watch]
                        set_label: &model.status,
                    },
                },

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,

                    add_controller = gtk::GestureClick {
                        set_button: 0,
                        connect_pressed[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::BoardClick(x, y));
                        }
                    }
                },

                #[name = "tray"]
                gtk::FlowBox {
                    set_selection_mode: gtk::SelectionMode::None,
                    set_homogeneous: true,
                    set_min_children_per_line: 10,
                    set_max_children_per_line: 10,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (board, board_size, rx) = init;

        theme::load_css();

        let board = Rc::new(RefCell::new(board));
        let (training, hardcore, status) = {
            let b = board.borrow();
            let modes = b.session.board().modes();
            (modes.training, modes.hardcore, b.status())
        };

        let model = AppModel {
            board: board.clone(),
            training,
            hardcore,
            status,
            drawing_area: gtk::DrawingArea::default(),
            tray_buttons: Vec::new(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.drawing_area.set_content_width(board_size);
        model.drawing_area.set_content_height(board_size);

        let colors = ThemeColors::default();
        let board_draw = model.board.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                board_draw
                    .borrow_mut()
                    .resize(width as f64, height as f64);
                if let Err(e) = board::draw(cr, &board_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        for number in DartNumber::all() {
            let button = gtk::Button::with_label(&number.to_string());
            button.add_css_class("tray-number");
            let sender = sender.clone();
            button.connect_clicked(move |_| sender.input(AppMsg::Select(number)));
            widgets.tray.insert(&button, -1);
            model.tray_buttons.push((number, button));
        }
        model.sync_tray();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Select(number) => {
                self.board.borrow_mut().select(number);
                self.sync_tray();
            }
            AppMsg::BoardClick(x, y) => {
                let action = self.board.borrow_mut().click(x, y);
                if action.should_buzz {
                    self.drawing_area.display().beep();
                }
                if action.tray_changed {
                    self.sync_tray();
                }
                if action.should_redraw {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Toggle(mode) => {
                let active = self.board.borrow_mut().toggle(mode);
                log::info!("{} {}", mode, if active { "enabled" } else { "disabled" });
                self.sync_tray();
                self.drawing_area.queue_draw();
            }
            AppMsg::Reset => {
                self.board.borrow_mut().reset();
                self.sync_tray();
                self.drawing_area.queue_draw();
            }
            AppMsg::Frame => {
                if self.board.borrow_mut().advance_pulse() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.board
                        .borrow_mut()
                        .session
                        .set_drill_size(new_config.drill_size);
                    let size = new_config.board_size_px();
                    self.drawing_area.set_content_width(size);
                    self.drawing_area.set_content_height(size);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
        self.sync_status();
    }
}

impl AppModel {
    /// Shows tray numbers still available and marks the selected one.
    fn sync_tray(&self) {
        let board = self.board.borrow();
        for (number, button) in &self.tray_buttons {
            button.set_visible(board.session.tray().contains(*number));
            if board.selected == Some(*number) {
                button.add_css_class("selected");
            } else {
                button.remove_css_class("selected");
            }
        }
    }

    fn sync_status(&mut self) {
        let board = self.board.borrow();
        let modes = board.session.board().modes();
        self.training = modes.training;
        self.hardcore = modes.hardcore;
        self.status = board.status();
    }
}
