use float_eq::assert_float_eq;
use socdist::prelude::*;

type ACone = SecondOrderCone<f64>;

//

#[test]
fn test_soc_new()
{
    let _ = env_logger::builder().is_test(true).try_init();

    for a in [1e-8, 0.5, 1., 2., 1e8] {
        let c = ACone::new(a).unwrap();
        assert_eq!(c.a(), a);
    }

    for a in [0., -0., -1., f64::NAN, f64::NEG_INFINITY] {
        let rslt = ACone::new(a).unwrap_err();
        println!("{}", rslt);

        assert_eq!(rslt, ConstraintError::Construction);
    }
}

//

#[test]
fn test_soc_inside()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let c = ACone::new(1.).unwrap();

    let d = c.distance_squared(&[0., 0., 1.][..]).unwrap();
    assert_eq!(d, 0.);

    let d = c.distance_squared(&[3., -4., 5.][..]).unwrap();
    assert_eq!(d, 0.);
}

//

#[test]
fn test_soc_polar()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let c = ACone::new(1.).unwrap();

    let d = c.distance_squared(&[3., 4., -10.][..]).unwrap();
    assert_float_eq!(d, 125., abs <= 1e-12);

    let c = ACone::new(0.5).unwrap();

    // r <= -a norm_x: nearest point is the apex
    let d = c.distance_squared(&[-2., -1.][..]).unwrap();
    assert_float_eq!(d, 5., abs <= 1e-12);
}

//

#[test]
fn test_soc_apex()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let c = ACone::new(1.).unwrap();

    assert_eq!(c.distance_squared(&[0., 0.][..]).unwrap(), 0.);
    assert_eq!(c.distance_squared(&[0., 0., 0., 0.][..]).unwrap(), 0.);
    assert_eq!(c.distance_squared(&[-0., 1e-17][..]).unwrap(), 0.);
}

//

#[test]
fn test_soc_general()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let a: f64 = 2.;
    let c = ACone::new(a).unwrap();

    let d = c.distance_squared(&[3., 0.][..]).unwrap();

    let norm_x: f64 = 3.;
    let r: f64 = 0.;
    let beta = a * a / (a * a + 1.);
    let an_r = a * norm_x + r;
    let closed_form = norm_x * norm_x
        + beta * an_r * an_r
        - 2. * a * norm_x * an_r
        + (r - an_r / (a * a + 1.)).powi(2);

    assert_float_eq!(d, closed_form, abs <= 1e-12);
    assert_float_eq!(d, -32.76, abs <= 1e-12);
}

//

#[test]
fn test_soc_idempotent()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let c = ACone::new(1.7).unwrap();

    for u in [[0.3, -1.2, 0.4], [3., 4., -10.], [0., 0., 1.], [1e-3, 2., -0.5]] {
        let d1: f64 = c.distance_squared(&u[..]).unwrap();
        let d2: f64 = c.distance_squared(&u[..]).unwrap();

        assert_eq!(d1.to_bits(), d2.to_bits());
    }
}

//

#[test]
fn test_soc_nonneg()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let vals: [f64; 7] = [-3., -1., -0.25, 0., 0.5, 2., 7.];

    for a in [0.3, 1., 2.5] {
        let c = ACone::new(a).unwrap();

        for &x0 in &vals {
            for &x1 in &vals {
                for &r in &vals {
                    let norm_x = (x0 * x0 + x1 * x1).sqrt();
                    let d = c.distance_squared(&[x0, x1, r][..]).unwrap();

                    if r >= norm_x / a {
                        assert_eq!(d, 0.);
                    }
                    else if r <= -a * norm_x {
                        assert_float_eq!(d, x0 * x0 + x1 * x1 + r * r, abs <= 1e-12);
                        assert!(d >= 0.);
                    }
                }
            }
        }
    }
}

//

#[test]
fn test_soc_f32()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let c = SecondOrderCone::<f32>::new(1.).unwrap();

    let d = c.distance_squared(&[3_f32, 4., -10.][..]).unwrap();
    assert_float_eq!(d, 125., abs <= 1e-4);

    assert!(c.param().eps_zero > 0.);
}

//

#[test]
fn test_soc_invalid()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let c = ACone::new(1.).unwrap();

    let empty: &[f64] = &[];
    assert_eq!(c.distance_squared(empty).unwrap_err(), ConstraintError::InvalidArgument);
    assert_eq!(c.distance_squared(&[1.][..]).unwrap_err(), ConstraintError::InvalidArgument);
}

//

#[test]
fn test_soc_project()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let c = ACone::new(1.).unwrap();

    let points: [&[f64]; 4] = [&[0., 0., 1.], &[3., 4., -10.], &[1.], &[]];

    for u in points {
        let rslt = c.project(u).unwrap_err();
        println!("{}", rslt);

        assert_eq!(rslt, ConstraintError::NotSupported);
    }
}

//

#[test]
fn test_soc_threads()
{
    let _ = env_logger::builder().is_test(true).try_init();

    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ACone>();

    let c = ACone::new(1.).unwrap();
    let expected: f64 = c.distance_squared(&[0.3, -1.2, 0.4][..]).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<std::thread::ScopedJoinHandle<'_, f64>> = (0.. 4).map(|_| {
            s.spawn(|| c.distance_squared(&[0.3, -1.2, 0.4][..]).unwrap())
        }).collect();

        for h in handles {
            assert_eq!(h.join().unwrap().to_bits(), expected.to_bits());
        }
    });
}
