use druid::widget::{Button, Flex, Label};
use druid::{AppLauncher, LocalizedString, PlatformError, Widget, WidgetExt, WindowDesc};

fn main() -> Result<(), PlatformError> {
    let main_window = WindowDesc::new(ui_builder())
        .title(LocalizedString::new("Rust Druid App"))
        .window_size((300.0, 200.0));

    let data = 0_u32;

    AppLauncher::with_window(main_window)
        .log_to_console()
        .launch(data)
}

fn ui_builder() -> impl Widget<u32> {
    let label = Label::new(|data: &u32, _env: &_| format!("Count: {}", data))
        .padding(5.0)
        .center();

    let button = Button::new("Increment")
        .on_click(|_ctx, data: &mut u32, _env| *data += 1)
        .padding(5.0);

    Flex::column().with_child(label).with_child(button)
}
