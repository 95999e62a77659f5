mod posterize;
