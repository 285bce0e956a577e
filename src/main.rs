mod app_router;
mod app_runtime;
mod boot;
mod dom;
mod gallery_view;
mod modal_view;
mod slide_runtime;
mod visibility_runtime;

fn main() {
    boot::start();
}
