// demos/closed_loop.rs

use control_blocks::{
    build_pid, closed_loop, feedback, unity_feedback, ArithmeticConfig, FeedbackSign,
    TransferFunctionError, TransferFunction,
};

fn main() -> Result<(), TransferFunctionError> {
    // Controller gains.
    let kp = 2.0;
    let ki = 1.0;
    let kd = 0.5;
    let controller = build_pid(kp, ki, kd);

    // First order plant 1 / (s + 1).
    let plant = TransferFunction::new(vec![1.0], vec![1.0, 1.0])?;

    // Series connection gives the open loop.
    let open_loop = &controller * &plant;

    // Close the loop on raw coefficients and through division with reduction.
    let closed = closed_loop(&open_loop)?;
    let config = ArithmeticConfig::<f64>::with_float_tolerance();
    let reduced = unity_feedback(&open_loop, &config)?;

    // Sensor with its own lag in the feedback path.
    let sensor = TransferFunction::new(vec![5.0], vec![1.0, 5.0])?;
    let with_sensor = feedback(&open_loop, &sensor, FeedbackSign::Negative)?;

    println!("Controller:        {}", controller);
    println!("Plant:             {}", plant);
    println!("Open Loop:         {}", open_loop);
    println!("Closed Loop:       {}", closed);
    println!("Unity Feedback:    {}", reduced);
    println!("Sensor Feedback:   {}", with_sensor);
    println!();

    println!("{:>8} {:>12} {:>12} {:>12}", "s", "Open", "Closed", "Sensor");
    println!("{:-<8} {:-<12} {:-<12} {:-<12}", "", "", "", "");
    for s in [0.1, 0.5, 1.0, 2.0, 5.0, 10.0] {
        println!(
            "{:8.2} {:12.6} {:12.6} {:12.6}",
            s,
            open_loop.eval(s)?,
            closed.eval(s)?,
            with_sensor.eval(s)?
        );
    }
    println!();
    println!("Closed loop DC gain: {:.6}", closed.dc_gain()?);

    Ok(())
}
