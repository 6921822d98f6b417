/*!
# Benchmark: `htattr`
*/

use criterion::{
	Criterion,
	criterion_group,
	criterion_main,
};
use htattr::AttributeMap;



fn attrs_to_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("htattr::attrs_to_string");

	let mut plain = AttributeMap::new();
	plain.set("name", "description");
	plain.set("content", "Fast, safe rendering of head-tag attribute fragments.");
	plain.set("data-hid", "desc");
	plain.set("hidden", false);
	plain.set("defer", true);

	let mut quoted = AttributeMap::new();
	quoted.set("title", "a\"b\"c");
	quoted.set("content", "\"quoted\" \"values\" \"everywhere\" \"all\" \"the\" \"time\"");

	group.bench_function("plain", |b| {
		b.iter(|| htattr::attrs_to_string(&plain))
	});

	group.bench_function("quoted", |b| {
		b.iter(|| htattr::attrs_to_string(&quoted))
	});

	group.finish();
}



criterion_group!(
	benches,
	attrs_to_string,
);
criterion_main!(benches);
