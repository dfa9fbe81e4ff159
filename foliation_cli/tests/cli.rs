use clap::Parser;
use foliation::ModulusPolicy;
use foliation_cli::cli::{run_with_output, Args};

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("foliate").chain(args.iter().copied())).unwrap()
}

fn output(args: &[&str]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_with_output(&parse(args), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn negative_values_and_target() {
    let args = parse(&["-t", "-10", "-c", "-5", "-1", "-4", "2", "15", "-62", "-7", "-8", "-9", "-10"]);
    assert_eq!(args.target, -10);
    assert_eq!(args.values, vec![-5, -1, -4, 2, 15, -62, -7, -8, -9, -10]);
    assert_eq!(args.modulus_policy(), ModulusPolicy::Covering);
    assert_eq!(args.size, None);
}

#[test]
fn modulus_options() {
    assert_eq!(parse(&["1", "2"]).modulus_policy(), ModulusPolicy::Heuristic);
    assert_eq!(parse(&["--modulus", "7", "1", "2"]).modulus_policy(), ModulusPolicy::Fixed(7));
    assert!(Args::try_parse_from(["foliate", "--modulus", "7", "--covering", "1"]).is_err());
    assert!(Args::try_parse_from(["foliate"]).is_err());
}

#[test]
fn existence() {
    let printed = output(&["--target=-10", "--covering", "-5", "-1", "-4", "2", "15", "-62", "-7", "-8", "-9", "-10"]).unwrap();
    assert_eq!(printed, "Subset with sum -10 exists.\nmodulus 124 (exact)\n");

    let printed = output(&["-t", "1", "-m", "9", "3", "5"]).unwrap();
    assert_eq!(printed, "No such subset exists.\nmodulus 9 (exact)\n");
}

#[test]
fn collision_is_disclosed() {
    let printed = output(&["-t", "1", "-m", "7", "3", "5"]).unwrap();
    assert_eq!(printed, "Subset with sum 1 exists.\nmodulus 7 (modular)\n");
}

#[test]
fn enumeration() {
    let printed = output(&["-t", "5", "-e", "-c", "3", "1", "4", "2"]).unwrap();
    assert_eq!(printed, "{1, 4}\n{3, 2}\n2 subset(s) found (modulus 11, exact)\n");

    let printed = output(&["-t", "5", "-e", "-s", "3", "-c", "3", "1", "4", "2"]).unwrap();
    assert_eq!(printed, "0 subset(s) found (modulus 11, exact)\n");
}

#[test]
fn errors_are_reported() {
    let err = output(&["-s", "3", "1", "2"]).unwrap_err();
    assert!(format!("{err:#}").contains("the input only has 2 elements"));

    let err = output(&["-m", "0", "1", "2"]).unwrap_err();
    assert!(format!("{err:#}").contains("must be strictly positive"));

    let err = output(&["-e", "-l", "2", "-m", "100", "1", "2", "3"]).unwrap_err();
    assert!(format!("{err:#}").contains("more than 2 subsets"));
}
