// demos/fixed_point.rs

use control_blocks::{closed_loop, Pid, PidGains, TransferFunction, TransferFunctionError};
use fixed::types::I16F16;

fn main() -> Result<(), TransferFunctionError> {
    let mut gains = PidGains::<I16F16>::new();

    // Set the PID gains.
    gains.kp = I16F16::from_num(2.0);
    gains.ki = I16F16::from_num(1.0);
    gains.kd = I16F16::from_num(0.5);

    let pid = Pid::with_gains(gains);

    // First order plant 1 / (s + 4).
    let plant = TransferFunction::new(
        vec![I16F16::from_num(1.0)],
        vec![I16F16::from_num(1.0), I16F16::from_num(4.0)],
    )?;

    let open_loop = pid.transfer_function() * &plant;
    let closed = closed_loop(&open_loop)?;

    println!("Controller:   {}", pid.transfer_function());
    println!("Open Loop:    {}", open_loop);
    println!("Closed Loop:  {}", closed);

    let mut s = I16F16::from_num(0.25);
    for _ in 0..=5 {
        println!("    s = {:-8.3}, T(s) = {:-8.3}", s, closed.eval(s)?);
        s *= I16F16::from_num(2);
    }

    Ok(())
}
