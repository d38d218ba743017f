use log::info;
use spinor::{AxesRender, AxisArrow, Rotation};

// Console stand-in for a plotting backend
struct ConsoleAxes;

impl AxesRender for ConsoleAxes {
    fn draw_arrow(&mut self, arrow: AxisArrow) {
        info!(
            "{:?} arrow from ({:.3}, {:.3}, {:.3}) along ({:.3}, {:.3}, {:.3})",
            arrow.color,
            arrow.origin.x,
            arrow.origin.y,
            arrow.origin.z,
            arrow.direction.x,
            arrow.direction.y,
            arrow.direction.z,
        );
    }
}

fn main() {
    pretty_env_logger::init();

    let mut axes = ConsoleAxes;

    info!("Identity rotation");
    Rotation::identity().draw_axes(&mut axes, 3.0);

    let rotation = Rotation::from_euler_zyx_deg(0.0, 0.0, 45.0);

    info!("45 degree rotation about the body X axis");
    rotation.draw_axes(&mut axes, 2.0);

    info!("Quaternion: {:?}", rotation.to_quaternion());
    info!("Rotation matrix: {:?}", rotation.to_rotation_matrix());
}
