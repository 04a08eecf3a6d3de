use can_i_drive_there::worker_agent::BacTask;
use yew_agent::Registrable;

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    BacTask::registrar().register();
}
