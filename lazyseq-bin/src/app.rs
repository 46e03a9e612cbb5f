const ABOUT: &str = "\
A command line tool for running lazy sequence pipelines over integers.

Every input is read as one integer per line. Blank lines are skipped. An input
of '-' (or an absent input where one is optional) means stdin, and likewise an
output of '-' means stdout.

Set RUST_LOG=trace to see the eager work each pipeline stage does when it is
built.
";

const ABOUT_RUN: &str = "\
Runs a pipeline over the integers in <input>.

Stages are applied in the order given, each one wrapping the chain built so
far. Nothing is read from the chain until the terminal operation runs, which
pulls elements through every stage.

Stages:

    reverse          Traverse from the back.
    skip:N           Drop the first N elements.
    take:N           Keep at most N elements.
    step:N           Keep every Nth element, starting with the first.
    filter:PRED      Keep elements satisfying PRED.
    map:FUNC         Transform every element with FUNC.

Predicates are one of odd, even, gt=N, lt=N, eq=N or ne=N. Functions are one
of square, neg, abs, add=N or mul=N. Arithmetic wraps on overflow.

Terminals:

    collect          Print every element, one per line. (default)
    count            Print the number of elements.
    sum              Print the sum of all elements.
    last             Print the last element, if any.
    nth:N            Print the Nth element (zero based), if any.
    position:V       Print the index of the first element equal to V, if any.
    any:PRED         Print whether any element satisfies PRED.
    all:PRED         Print whether every element satisfies PRED.
    partition:PRED   Print the elements satisfying PRED, a blank line, and
                     then the elements that don't.

Example:

    $ seq 1 5 | lazyseq run -s reverse -s filter:odd -s map:square
    25
    9
    1
";

const ABOUT_CONCAT: &str = "\
Prints the integers of every input, in order, as one sequence.

The inputs are chained lazily, so no input is read past what is needed.
Use --reverse to print the concatenation from its last element backwards.
";

const ABOUT_ZIP: &str = "\
Pairs up the integers of two inputs, line by line.

The shorter input decides how many pairs are printed. Each pair is printed as
two tab separated columns. With --enumerate, a leading column holds the
pair's index. With --reverse, pairs are printed from the back, and the indices
still refer to forward positions.

When the inputs have different lengths, pairing from the back matches the last
element of each input, which is not what forward pairing would produce.
";

pub fn app() -> clap::App<'static, 'static> {
    let cmd = |name, about| {
        clap::SubCommand::with_name(name)
            .author(clap::crate_authors!())
            .version(clap::crate_version!())
            .about(about)
    };
    let pos = |name| clap::Arg::with_name(name);
    let flag = |name| clap::Arg::with_name(name).long(name);

    let run = cmd("run", ABOUT_RUN)
        .arg(pos("input").help(
            "A file containing an integer per line. \
             When absent, read from stdin.",
        ))
        .arg(pos("output").help(
            "An optional file path to write results to. \
             When empty, output is written to stdout.",
        ))
        .arg(
            flag("stage")
                .short("s")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("A pipeline stage. May be given multiple times."),
        )
        .arg(
            flag("terminal")
                .short("t")
                .default_value("collect")
                .help("The terminal operation that drives the pipeline."),
        );

    let concat = cmd("concat", ABOUT_CONCAT)
        .arg(
            pos("input")
                .required(true)
                .multiple(true)
                .help("One or more files containing an integer per line."),
        )
        .arg(
            flag("output")
                .short("o")
                .takes_value(true)
                .help("Write output here instead of stdout."),
        )
        .arg(flag("reverse").short("r").help("Print from the back."));

    let zip = cmd("zip", ABOUT_ZIP)
        .arg(pos("left").required(true).help("The left column's input."))
        .arg(pos("right").required(true).help("The right column's input."))
        .arg(
            flag("output")
                .short("o")
                .takes_value(true)
                .help("Write output here instead of stdout."),
        )
        .arg(
            flag("enumerate")
                .short("e")
                .help("Prefix every pair with its forward index."),
        )
        .arg(flag("reverse").short("r").help("Print pairs from the back."));

    clap::App::new("lazyseq")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .max_term_width(100)
        .setting(clap::AppSettings::UnifiedHelpMessage)
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .subcommand(concat)
        .subcommand(run)
        .subcommand(zip)
}
