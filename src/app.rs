use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchpadConfig;
use crate::drawable::RenderStyle;
use crate::event::{EventCounter, RepaintRequester};
use crate::input::{InputHandler, PointerFrame};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::SketchpadState;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Text typed into the custom sticker prompt while it is open
#[derive(Debug, Default)]
struct StickerPrompt {
    text: String,
    error: Option<String>,
    focused: bool,
}

pub struct SketchpadApp {
    config: SketchpadConfig,
    state: SketchpadState,
    renderer: Renderer,
    input: InputHandler,
    counter: EventCounter,
    sticker_prompt: Option<StickerPrompt>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        Self::with_context(&cc.egui_ctx, config)
    }

    pub fn with_context(ctx: &egui::Context, config: SketchpadConfig) -> Self {
        let state = SketchpadState::new(&config);
        let counter = EventCounter::new();
        state.subscribe(Box::new(RepaintRequester::new(ctx.clone())));
        state.subscribe(Box::new(counter.clone()));

        Self {
            renderer: Renderer::new(RenderStyle::from_config(&config)),
            config,
            state,
            input: InputHandler::new(),
            counter,
            sticker_prompt: None,
        }
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn state(&self) -> &SketchpadState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SketchpadState {
        &mut self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn event_counter(&self) -> &EventCounter {
        &self.counter
    }

    /// Feed one frame of canvas pointer state through to the sketchpad
    pub fn handle_pointer(&mut self, frame: PointerFrame) {
        for event in self.input.process(frame) {
            self.state.handle_input(&event);
        }
    }

    pub fn open_sticker_prompt(&mut self) {
        if self.sticker_prompt.is_none() {
            self.sticker_prompt = Some(StickerPrompt::default());
        }
    }

    pub fn is_sticker_prompt_open(&self) -> bool {
        self.sticker_prompt.is_some()
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.sticker_prompt.is_some() || ctx.wants_keyboard_input() {
            return;
        }

        // Most specific shortcut first, Cmd+Z would also match Cmd+Shift+Z
        let (redo, undo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&REDO_SHORTCUT)
                || input.consume_shortcut(&REDO_SHORTCUT_ALT);
            let undo = !redo && input.consume_shortcut(&UNDO_SHORTCUT);
            (redo, undo)
        });

        if redo {
            self.state.redo();
        } else if undo {
            self.state.undo();
        }
    }

    fn show_sticker_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.sticker_prompt.as_mut() else {
            return;
        };

        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new("Custom Sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Enter sticker text:");
                let response = ui.text_edit_singleline(&mut prompt.text);
                if !prompt.focused {
                    response.request_focus();
                    prompt.focused = true;
                }
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                if let Some(error) = &prompt.error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }

                ui.horizontal(|ui| {
                    submitted = ui.button("Add").clicked() || entered;
                    cancelled = ui.button("Cancel").clicked()
                        || ui.input(|i| i.key_pressed(Key::Escape));
                });
            });

        if cancelled {
            log::debug!("Custom sticker prompt cancelled");
            self.sticker_prompt = None;
        } else if submitted {
            let text = prompt.text.clone();
            match self.state.add_custom_sticker(Some(&text)) {
                Ok(_) => self.sticker_prompt = None,
                Err(err) => {
                    if let Some(prompt) = self.sticker_prompt.as_mut() {
                        prompt.error = Some(err.to_string());
                        prompt.focused = false;
                    }
                }
            }
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.show_sticker_prompt(ctx);
    }
}
